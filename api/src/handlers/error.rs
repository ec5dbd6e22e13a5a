//! Mapping from domain errors to HTTP responses
//!
//! Every error body is the shared `ErrorResponse` except booking conflicts,
//! which carry the colliding bookings the way the availability check does.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use validator::ValidationErrors;

use rent_core::errors::DomainError;

use crate::dto::{
    error_codes, validation_error_response, BookingConflictResponse, ErrorResponse, ErrorResponseExt,
};

/// Error returned by route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// DTO field validation failed
    #[error("Invalid request data")]
    InvalidRequest(#[from] ValidationErrors),

    /// Body, path or query could not be decoded
    #[error("{0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error),
            ApiError::InvalidRequest(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => to_http_response(error),
            ApiError::InvalidRequest(errors) => {
                validation_error_response(errors).to_response(StatusCode::BAD_REQUEST)
            }
            ApiError::BadRequest(message) => {
                ErrorResponse::new(error_codes::BAD_REQUEST, message.clone())
                    .to_response(StatusCode::BAD_REQUEST)
            }
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::PaymentProvider { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Persistence { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Convert a domain error into the response sent to the client
///
/// Storage and internal failures are logged in full and answered with a
/// generic message.
pub fn to_http_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    match error {
        DomainError::Conflict { message, conflicts } => {
            HttpResponse::build(status).json(BookingConflictResponse {
                message: message.clone(),
                available: false,
                conflicting_bookings: conflicts.clone(),
            })
        }
        DomainError::ValidationErr(validation) => {
            ErrorResponse::from(validation.clone()).to_response(status)
        }
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()).to_response(status)
        }
        DomainError::NotFound { message } => {
            ErrorResponse::new(error_codes::NOT_FOUND, message.clone()).to_response(status)
        }
        DomainError::PaymentProvider { message } => {
            log::error!("Checkout provider failure: {}", message);
            ErrorResponse::new(
                error_codes::PAYMENT_PROVIDER_ERROR,
                "The payment provider could not process the request",
            )
            .to_response(status)
        }
        DomainError::Persistence { message } => {
            log::error!("Storage failure: {}", message);
            ErrorResponse::new(error_codes::DATABASE_ERROR, "An internal error occurred").to_response(status)
        }
        DomainError::Internal { message } => {
            log::error!("Internal failure: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred").to_response(status)
        }
    }
}

/// Malformed or oversized JSON bodies answer 400 in the shared error shape
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

/// Path segments that fail to parse (ids that are not UUIDs) answer 400
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path {}: {}", req.path(), err);
    ApiError::BadRequest(format!("Invalid path parameter: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query string: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rent_core::errors::ValidationError;
    use rent_core::services::booking::NO_BOOKINGS_MESSAGE;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DomainError::Validation {
                    message: "bad".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Conflict {
                    message: "taken".to_string(),
                    conflicts: vec![],
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::not_found("Booking"),
                StatusCode::NOT_FOUND,
            ),
            (DomainError::persistence("down"), StatusCode::INTERNAL_SERVER_ERROR),
            (
                DomainError::PaymentProvider {
                    message: "502".to_string(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(status_for(&error), expected, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_conflict_body_lists_bookings() {
        let error = DomainError::Conflict {
            message: "The selected dates are not available for this property.".to_string(),
            conflicts: vec![],
        };

        let response = to_http_response(&error);
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["available"], false);
        assert!(body["conflictingBookings"].is_array());
    }

    #[actix_web::test]
    async fn test_validation_error_keeps_code_and_field() {
        let error = DomainError::from(ValidationError::InvalidDate {
            field: "startDate".to_string(),
            value: "soon".to_string(),
        });

        let body = body_json(to_http_response(&error)).await;
        assert_eq!(body["error"], error_codes::INVALID_DATE);
        assert_eq!(body["details"]["field"], "startDate");
    }

    #[actix_web::test]
    async fn test_storage_failure_hides_message() {
        let body = body_json(to_http_response(&DomainError::persistence("password=hunter2"))).await;
        assert_eq!(body["error"], error_codes::DATABASE_ERROR);
        assert!(!body["message"].as_str().unwrap().contains("hunter2"));
    }

    #[actix_web::test]
    async fn test_not_found_message_passes_through() {
        let error = DomainError::NotFound {
            message: NO_BOOKINGS_MESSAGE.to_string(),
        };
        let body = body_json(to_http_response(&error)).await;
        assert_eq!(body["message"], NO_BOOKINGS_MESSAGE);

        let id = uuid::Uuid::new_v4();
        let body = body_json(to_http_response(&DomainError::booking_not_found(id))).await;
        assert_eq!(body["error"], error_codes::NOT_FOUND);
        assert_eq!(body["message"], format!("Booking {} not found", id));
    }
}
