//! Checkout provider configuration module

use serde::{Deserialize, Serialize};

/// Checkout provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentProvider {
    /// Stripe Checkout sessions
    Stripe,
    /// In-process fake provider for development and tests
    Mock,
}

impl std::str::FromStr for PaymentProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stripe" => Ok(PaymentProvider::Stripe),
            "mock" => Ok(PaymentProvider::Mock),
            _ => Err(format!("Invalid payment provider: {}", s)),
        }
    }
}

/// Checkout provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Provider used for checkout sessions
    #[serde(default = "default_provider")]
    pub provider: PaymentProvider,

    /// Provider secret key
    #[serde(default, skip_serializing)]
    pub secret_key: Option<String>,

    /// Provider API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Frontend URL the provider redirects back to
    #[serde(default = "default_client_url")]
    pub client_url: String,

    /// ISO currency code for line items
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Product name shown on the checkout page
    #[serde(default = "default_product_name")]
    pub product_name: String,

    /// Timeout for provider requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            secret_key: None,
            api_base: default_api_base(),
            client_url: default_client_url(),
            currency: default_currency(),
            product_name: default_product_name(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl PaymentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_env_or(Self::default())
    }

    /// Override `base` with any payment variables present in the environment
    pub fn from_env_or(base: Self) -> Self {
        let provider = std::env::var("PAYMENT_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(base.provider);
        let secret_key = std::env::var("STRIPE_SECRET_KEY").ok().or(base.secret_key);
        let client_url = std::env::var("CLIENT_URL").unwrap_or(base.client_url);
        let currency = std::env::var("PAYMENT_CURRENCY").unwrap_or(base.currency);

        Self {
            provider,
            secret_key,
            client_url,
            currency,
            ..base
        }
    }

    /// Use the given provider
    pub fn with_provider(mut self, provider: PaymentProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    pub fn with_client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }

    /// URL the provider redirects to after a successful payment
    pub fn success_url(&self) -> String {
        format!(
            "{}/payment-success?session_id={{CHECKOUT_SESSION_ID}}",
            self.client_url.trim_end_matches('/')
        )
    }

    /// URL the provider redirects to when the customer abandons checkout
    pub fn cancel_url(&self) -> String {
        format!("{}/payment-cancel", self.client_url.trim_end_matches('/'))
    }
}

fn default_provider() -> PaymentProvider {
    PaymentProvider::Mock
}

fn default_api_base() -> String {
    String::from("https://api.stripe.com")
}

fn default_client_url() -> String {
    String::from("http://localhost:3000")
}

fn default_currency() -> String {
    String::from("usd")
}

fn default_product_name() -> String {
    String::from("Mauri Rent Booking Payment")
}

fn default_request_timeout() -> u64 {
    15
}
