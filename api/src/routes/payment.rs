//! Checkout handlers
//!
//! The frontend opens a checkout session for a pending booking, redirects
//! the customer to the provider, and calls `payment-success` with the
//! session id once the customer returns.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use rent_core::domain::entities::PaymentStatus;
use rent_core::repositories::BookingRepository;
use rent_core::services::payment::CheckoutGateway;

use crate::dto::{
    CheckoutSessionResponse, CreateCheckoutSessionRequest, PaymentSuccessRequest, PaymentSuccessResponse,
};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

use super::AppState;

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Payment successful and booking status updated.";
pub const PAYMENT_FAILED_MESSAGE: &str = "Payment was not completed; booking marked as failed.";

/// Handler for POST /api/v1/payment/create-checkout-session
///
/// # Request Body
///
/// ```json
/// { "bookingId": "3f1c...", "amount": 50000 }
/// ```
///
/// `amount` is in cents.
pub async fn create_checkout_session<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<CreateCheckoutSessionRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let request_id = req.request_id();
    request.validate()?;

    let session = state
        .payment_service
        .create_checkout_session(request.booking_id, request.amount)
        .await?;

    log::info!(
        "[{}] Checkout session {} opened for booking {}",
        request_id,
        session.id,
        request.booking_id
    );

    Ok(HttpResponse::Ok().json(CheckoutSessionResponse {
        id: session.id,
        url: session.url,
    }))
}

/// Handler for POST /api/v1/payment/payment-success
pub async fn payment_success<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<PaymentSuccessRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let request_id = req.request_id();
    request.validate()?;

    let confirmation = state.payment_service.confirm_payment(&request.session_id).await?;

    let message = match confirmation.payment_status {
        PaymentStatus::Paid => PAYMENT_SUCCESS_MESSAGE,
        _ => PAYMENT_FAILED_MESSAGE,
    };

    log::info!(
        "[{}] Session {} settled booking {} as {}",
        request_id,
        request.session_id,
        confirmation.booking_id,
        confirmation.payment_status
    );

    Ok(HttpResponse::Ok().json(PaymentSuccessResponse {
        message: message.to_string(),
        payment_details: confirmation,
    }))
}
