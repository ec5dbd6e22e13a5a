use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use rent_core::domain::value_objects::PaymentConfirmation;

/// Body of `POST /payment/create-checkout-session`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionRequest {
    pub booking_id: Uuid,

    /// Amount in cents
    #[validate(range(min = 1, message = "amount must be a positive number of cents"))]
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `POST /payment/payment-success`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessRequest {
    #[validate(
        length(min = 1, message = "sessionId is required"),
        custom(function = "validate_session_id")
    )]
    pub session_id: String,
}

/// Checkout session ids are opaque tokens of ASCII letters, digits and `_`
fn validate_session_id(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        let mut error = ValidationError::new("session_id_format");
        error.message = Some("sessionId contains invalid characters".into());
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessResponse {
    pub message: String,
    pub payment_details: PaymentConfirmation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(session_id: &str) -> PaymentSuccessRequest {
        PaymentSuccessRequest {
            session_id: session_id.to_string(),
        }
    }

    #[test]
    fn test_session_id_format() {
        assert!(request("cs_test_a1B2").validate().is_ok());
        assert!(request("").validate().is_err());
        assert!(request("../../charges/ch_x").validate().is_err());
        assert!(request("cs_1?expand=customer").validate().is_err());
    }
}
