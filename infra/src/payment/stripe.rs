//! Stripe Checkout gateway
//!
//! Talks to the Stripe REST API directly with reqwest: sessions are created
//! with a form-encoded `POST /v1/checkout/sessions` and read back with
//! `GET /v1/checkout/sessions/{id}`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use rent_core::domain::value_objects::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, SessionPaymentState,
};
use rent_core::errors::DomainError;
use rent_core::services::payment::CheckoutGateway;
use rent_shared::config::PaymentConfig;

use crate::InfrastructureError;

/// Stripe gateway configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key
    pub secret_key: String,
    /// API base URL, overridable for tests
    pub api_base: String,
    /// Redirect after a completed checkout
    pub success_url: String,
    /// Redirect after an abandoned checkout
    pub cancel_url: String,
    /// ISO currency code
    pub currency: String,
    /// Line item name
    pub product_name: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl StripeConfig {
    /// Build from the shared payment configuration
    pub fn from_payment_config(config: &PaymentConfig) -> Result<Self, InfrastructureError> {
        let secret_key = config
            .secret_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("STRIPE_SECRET_KEY not set".to_string()))?;

        Ok(Self {
            secret_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            success_url: config.success_url(),
            cancel_url: config.cancel_url(),
            currency: config.currency.clone(),
            product_name: config.product_name.clone(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

/// Session object as returned by Stripe; only the fields we read
#[derive(Debug, Deserialize)]
struct StripeSession {
    id: String,
    url: Option<String>,
    client_reference_id: Option<String>,
    payment_status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
    code: Option<String>,
}

fn payment_state(status: Option<&str>) -> SessionPaymentState {
    match status {
        Some("paid") => SessionPaymentState::Paid,
        Some("no_payment_required") => SessionPaymentState::NoPaymentRequired,
        _ => SessionPaymentState::Unpaid,
    }
}

/// Form fields for a one-item card checkout session
pub(crate) fn checkout_form(config: &StripeConfig, request: &CheckoutRequest) -> Vec<(&'static str, String)> {
    vec![
        ("mode", "payment".to_string()),
        ("payment_method_types[0]", "card".to_string()),
        ("line_items[0][price_data][currency]", config.currency.clone()),
        (
            "line_items[0][price_data][product_data][name]",
            config.product_name.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]",
            request.amount_cents.to_string(),
        ),
        ("line_items[0][quantity]", "1".to_string()),
        ("success_url", config.success_url.clone()),
        ("cancel_url", config.cancel_url.clone()),
        ("client_reference_id", request.booking_id.to_string()),
    ]
}

/// Stripe Checkout implementation of CheckoutGateway
pub struct StripeCheckoutGateway {
    client: reqwest::Client,
    config: StripeConfig,
}

impl StripeCheckoutGateway {
    /// Create a new gateway with its own HTTP client
    pub fn new(config: StripeConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Stripe checkout gateway initialized");
        Ok(Self { client, config })
    }

    fn sessions_url(&self) -> String {
        format!("{}/v1/checkout/sessions", self.config.api_base)
    }

    /// URL of one session; the id always stays a single path segment
    pub(crate) fn session_url(&self, session_id: &str) -> Result<reqwest::Url, DomainError> {
        let invalid = || DomainError::PaymentProvider {
            message: format!("Invalid checkout API base {}", self.config.api_base),
        };
        let mut url = reqwest::Url::parse(&self.sessions_url()).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.push(session_id);
        Ok(url)
    }

    async fn provider_error(response: reqwest::Response) -> (reqwest::StatusCode, StripeErrorDetail) {
        let status = response.status();
        let detail = match response.json::<StripeErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => StripeErrorDetail {
                message: None,
                code: None,
            },
        };
        (status, detail)
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    error!("Stripe request failed: {}", e);
    DomainError::PaymentProvider {
        message: format!("Checkout provider unreachable: {}", e),
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
    async fn create_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession, DomainError> {
        debug!(booking_id = %request.booking_id, "Creating Stripe checkout session");

        let response = self
            .client
            .post(self.sessions_url())
            .bearer_auth(&self.config.secret_key)
            .form(&checkout_form(&self.config, request))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let (status, detail) = Self::provider_error(response).await;
            error!(
                status = %status,
                code = detail.code.as_deref().unwrap_or("unknown"),
                "Stripe rejected checkout session"
            );
            return Err(DomainError::PaymentProvider {
                message: detail
                    .message
                    .unwrap_or_else(|| format!("Checkout provider returned {}", status)),
            });
        }

        let session: StripeSession = response.json().await.map_err(transport_error)?;
        Ok(CheckoutSession {
            id: session.id,
            url: session.url,
        })
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<CheckoutSessionDetails, DomainError> {
        let response = self
            .client
            .get(self.session_url(session_id)?)
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(format_args!("Checkout session {}", session_id)));
        }
        if !response.status().is_success() {
            let (status, detail) = Self::provider_error(response).await;
            return Err(DomainError::PaymentProvider {
                message: detail
                    .message
                    .unwrap_or_else(|| format!("Checkout provider returned {}", status)),
            });
        }

        let session: StripeSession = response.json().await.map_err(transport_error)?;
        Ok(CheckoutSessionDetails {
            payment_state: payment_state(session.payment_status.as_deref()),
            id: session.id,
            client_reference_id: session.client_reference_id,
        })
    }
}
