//! In-process checkout gateway for development and tests
//!
//! Sessions are held in memory. The hosted page URL points straight at the
//! frontend success URL, so the full create/confirm flow works locally
//! without a provider account.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use rent_core::domain::value_objects::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, SessionPaymentState,
};
use rent_core::errors::DomainError;
use rent_core::services::payment::CheckoutGateway;

/// Fake checkout provider
#[derive(Clone)]
pub struct MockCheckoutGateway {
    sessions: Arc<RwLock<HashMap<String, CheckoutSessionDetails>>>,
    success_url: String,
    outcome: SessionPaymentState,
}

impl MockCheckoutGateway {
    /// Create a gateway whose sessions complete with payment
    pub fn new(success_url: impl Into<String>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            success_url: success_url.into(),
            outcome: SessionPaymentState::Paid,
        }
    }

    /// Report every new session with the given settlement state
    pub fn with_outcome(mut self, outcome: SessionPaymentState) -> Self {
        self.outcome = outcome;
        self
    }

    /// Number of sessions opened so far
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl CheckoutGateway for MockCheckoutGateway {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, DomainError> {
        let id = format!("cs_mock_{}", Uuid::new_v4().simple());
        let url = self.success_url.replace("{CHECKOUT_SESSION_ID}", &id);

        self.sessions.write().await.insert(
            id.clone(),
            CheckoutSessionDetails {
                id: id.clone(),
                client_reference_id: Some(request.booking_id.to_string()),
                payment_state: self.outcome,
            },
        );

        tracing::debug!(session_id = %id, booking_id = %request.booking_id, "Mock checkout session created");
        Ok(CheckoutSession { id, url: Some(url) })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSessionDetails, DomainError> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format_args!("Checkout session {}", session_id)))
    }
}
