//! Checkout provider module
//!
//! Implementations of the core `CheckoutGateway` trait:
//! - **Stripe**: hosted Checkout sessions over the Stripe REST API
//! - **Mock**: in-process sessions for development and tests

use async_trait::async_trait;

use rent_core::domain::value_objects::{CheckoutRequest, CheckoutSession, CheckoutSessionDetails};
use rent_core::errors::DomainError;
use rent_core::services::payment::CheckoutGateway;
use rent_shared::config::{PaymentConfig, PaymentProvider};

use crate::InfrastructureError;

pub mod mock;
pub mod stripe;


pub use mock::MockCheckoutGateway;
pub use stripe::{StripeCheckoutGateway, StripeConfig};

/// Checkout gateway chosen by `PAYMENT_PROVIDER`
pub enum CheckoutProvider {
    Stripe(StripeCheckoutGateway),
    Mock(MockCheckoutGateway),
}

impl CheckoutProvider {
    pub fn provider_name(&self) -> &'static str {
        match self {
            CheckoutProvider::Stripe(_) => "stripe",
            CheckoutProvider::Mock(_) => "mock",
        }
    }

    fn gateway(&self) -> &dyn CheckoutGateway {
        match self {
            CheckoutProvider::Stripe(gateway) => gateway,
            CheckoutProvider::Mock(gateway) => gateway,
        }
    }
}

#[async_trait]
impl CheckoutGateway for CheckoutProvider {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, DomainError> {
        self.gateway().create_session(request).await
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSessionDetails, DomainError> {
        self.gateway().retrieve_session(session_id).await
    }
}

/// Create the checkout gateway for the configured provider
///
/// A Stripe provider without a secret key is a configuration error rather
/// than a silent fallback to the mock.
pub fn create_checkout_gateway(config: &PaymentConfig) -> Result<CheckoutProvider, InfrastructureError> {
    match config.provider {
        PaymentProvider::Stripe => {
            let stripe_config = StripeConfig::from_payment_config(config)?;
            Ok(CheckoutProvider::Stripe(StripeCheckoutGateway::new(stripe_config)?))
        }
        PaymentProvider::Mock => {
            tracing::warn!("Using mock checkout gateway; no real payments are taken");
            Ok(CheckoutProvider::Mock(MockCheckoutGateway::new(config.success_url())))
        }
    }
}
