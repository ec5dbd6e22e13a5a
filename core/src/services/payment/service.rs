//! Payment service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::value_objects::{
    CheckoutRequest, CheckoutSession, PaymentConfirmation, SessionPaymentState,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::BookingRepository;
use crate::services::booking::BookingService;

use super::gateway::CheckoutGateway;

/// Connects the checkout provider to the booking engine
pub struct PaymentService<R, G>
where
    R: BookingRepository,
    G: CheckoutGateway,
{
    booking_service: Arc<BookingService<R>>,
    gateway: Arc<G>,
}

impl<R, G> PaymentService<R, G>
where
    R: BookingRepository,
    G: CheckoutGateway,
{
    pub fn new(booking_service: Arc<BookingService<R>>, gateway: Arc<G>) -> Self {
        Self {
            booking_service,
            gateway,
        }
    }

    /// Open a hosted checkout session for an existing booking
    ///
    /// # Arguments
    ///
    /// * `booking_id` - Booking the payment settles
    /// * `amount_cents` - Amount in the currency's minor unit, must be positive
    ///
    /// # Returns
    ///
    /// * `Ok(CheckoutSession)` - Session id and hosted page URL
    /// * `Err(DomainError::NotFound)` - Unknown booking
    /// * `Err(DomainError::PaymentProvider)` - Provider rejected the request
    pub async fn create_checkout_session(
        &self,
        booking_id: Uuid,
        amount_cents: i64,
    ) -> DomainResult<CheckoutSession> {
        if amount_cents <= 0 {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: "1".to_string(),
                max: i64::MAX.to_string(),
            }
            .into());
        }

        let booking = self.booking_service.get_booking(booking_id).await?;

        let session = self
            .gateway
            .create_session(&CheckoutRequest {
                booking_id: booking.id,
                amount_cents,
            })
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            session_id = %session.id,
            amount_cents = amount_cents,
            event = "checkout_session_created",
            "Opened checkout session"
        );

        Ok(session)
    }

    /// Settle the booking referenced by a returning checkout session
    ///
    /// This method:
    /// 1. Retrieves the session from the provider
    /// 2. Resolves the booking from the session's client reference
    /// 3. Marks the booking paid, or failed when the provider reports the
    ///    session unpaid
    pub async fn confirm_payment(&self, session_id: &str) -> DomainResult<PaymentConfirmation> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "sessionId".to_string(),
            }
            .into());
        }

        let session = self.gateway.retrieve_session(session_id).await?;

        let reference = session.client_reference_id.as_deref().ok_or_else(|| {
            DomainError::Validation {
                message: format!("Checkout session {} has no booking reference", session.id),
            }
        })?;
        let booking_id = Uuid::parse_str(reference).map_err(|_| ValidationError::InvalidFormat {
            field: "clientReferenceId".to_string(),
        })?;

        let booking = match session.payment_state {
            SessionPaymentState::Paid | SessionPaymentState::NoPaymentRequired => {
                self.booking_service.mark_paid(booking_id).await?
            }
            SessionPaymentState::Unpaid => {
                tracing::warn!(
                    session_id = %session.id,
                    booking_id = %booking_id,
                    event = "checkout_session_unpaid",
                    "Checkout session returned without payment"
                );
                self.booking_service.mark_failed(booking_id).await?
            }
        };

        Ok(PaymentConfirmation {
            booking_id: booking.id,
            listing_id: booking.listing_id,
            host_id: booking.host_id,
            price_paid: booking.total_price,
            payment_date: booking.updated_at,
            payment_status: booking.payment_status,
        })
    }
}
