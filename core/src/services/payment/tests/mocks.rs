//! Mock checkout gateway for payment service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, SessionPaymentState,
};
use crate::errors::DomainError;
use crate::services::payment::CheckoutGateway;

#[derive(Default)]
pub struct MockGateway {
    pub sessions: Arc<Mutex<HashMap<String, CheckoutSessionDetails>>>,
    pub requests: Arc<Mutex<Vec<CheckoutRequest>>>,
    pub should_fail: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Register a session as the provider would report it
    pub fn with_session(self, id: &str, reference: Option<String>, state: SessionPaymentState) -> Self {
        self.sessions.lock().unwrap().insert(
            id.to_string(),
            CheckoutSessionDetails {
                id: id.to_string(),
                client_reference_id: reference,
                payment_state: state,
            },
        );
        self
    }
}

#[async_trait]
impl CheckoutGateway for MockGateway {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, DomainError> {
        if self.should_fail {
            return Err(DomainError::PaymentProvider {
                message: "provider unavailable".to_string(),
            });
        }
        self.requests.lock().unwrap().push(request.clone());
        let id = format!("cs_test_{}", request.booking_id.simple());
        self.sessions.lock().unwrap().insert(
            id.clone(),
            CheckoutSessionDetails {
                id: id.clone(),
                client_reference_id: Some(request.booking_id.to_string()),
                payment_state: SessionPaymentState::Unpaid,
            },
        );
        Ok(CheckoutSession {
            url: Some(format!("https://checkout.test/pay/{}", id)),
            id,
        })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSessionDetails, DomainError> {
        if self.should_fail {
            return Err(DomainError::PaymentProvider {
                message: "provider unavailable".to_string(),
            });
        }
        self.sessions
            .lock()
            .unwrap()
            .get(session_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format_args!("Checkout session {}", session_id)))
    }
}
