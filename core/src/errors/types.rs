//! Domain-specific error types for booking validation
//!
//! Error codes are stable identifiers clients can branch on; messages are
//! meant for humans and may change.

use rent_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid date for field {field}: {value}")]
    InvalidDate { field: String, value: String },

    #[error("Start date {start} must be before end date {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Amount must not be negative: {field}")]
    NegativeAmount { field: String },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    /// Stable code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidDate { .. } => error_codes::INVALID_DATE,
            ValidationError::InvalidDateRange { .. } => error_codes::INVALID_DATE_RANGE,
            ValidationError::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }

    /// Field the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidDate { field, .. }
            | ValidationError::NegativeAmount { field }
            | ValidationError::OutOfRange { field, .. } => Some(field),
            ValidationError::InvalidDateRange { .. } => None,
        }
    }
}

/// Convert ValidationError to ErrorResponse
impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let response = ErrorResponse::new(err.code(), err.to_string());
        match err.field() {
            Some(field) => response.add_detail("field", field),
            None => response,
        }
    }
}
