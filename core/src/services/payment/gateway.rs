//! Checkout provider abstraction

use async_trait::async_trait;

use crate::domain::value_objects::{CheckoutRequest, CheckoutSession, CheckoutSessionDetails};
use crate::errors::DomainError;

/// Trait for hosted checkout providers
///
/// Implementations map provider failures to `DomainError::PaymentProvider`.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Open a checkout session whose client reference is the booking id
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, DomainError>;

    /// Fetch a previously created session
    ///
    /// # Returns
    /// * `Ok(CheckoutSessionDetails)` - Session with its settlement state
    /// * `Err(DomainError::NotFound)` - Unknown session id
    /// * `Err(DomainError::PaymentProvider)` - Provider failure
    async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSessionDetails, DomainError>;
}
