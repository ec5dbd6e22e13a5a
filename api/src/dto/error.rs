use actix_web::{http::StatusCode, HttpResponse};
use std::collections::HashMap;
use validator::ValidationErrors;

pub use rent_shared::errors::{error_codes, ErrorResponse};

/// actix-web helpers for the shared error body
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// 400 body listing every failed field of a request DTO
pub fn validation_error_response(errors: &ValidationErrors) -> ErrorResponse {
    let fields: HashMap<String, Vec<String>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data").add_detail("fields", fields)
}
