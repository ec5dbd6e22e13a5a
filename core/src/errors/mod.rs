//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types and utilities
pub use types::ValidationError;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::Booking;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Booking conflict: {message}")]
    Conflict {
        message: String,
        conflicts: Vec<Booking>,
    },

    /// `message` is shown to clients as is
    #[error("{message}")]
    NotFound { message: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Payment provider error: {message}")]
    PaymentProvider { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// NotFound for a named resource
    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            message: format!("{} not found", resource),
        }
    }

    /// NotFound for a booking id
    pub fn booking_not_found(id: Uuid) -> Self {
        Self::not_found(format_args!("Booking {}", id))
    }

    /// Wrap a storage failure
    pub fn persistence(err: impl std::fmt::Display) -> Self {
        DomainError::Persistence {
            message: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DomainError::Conflict { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
