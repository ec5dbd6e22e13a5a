//! Value objects exchanged with the checkout provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::PaymentStatus;

/// A hosted checkout page opened for one booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider session identifier
    pub id: String,

    /// Hosted page the customer is redirected to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Request for a new checkout session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Booking the payment settles, echoed back as the client reference
    pub booking_id: Uuid,

    /// Amount in the currency's minor unit
    pub amount_cents: i64,
}

/// Settlement state of a checkout session as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPaymentState {
    Paid,
    Unpaid,
    NoPaymentRequired,
}

/// Checkout session as retrieved after the customer returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSessionDetails {
    pub id: String,

    /// Raw client reference, expected to hold a booking id
    pub client_reference_id: Option<String>,

    pub payment_state: SessionPaymentState,
}

/// Result of handling a payment-success callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub booking_id: Uuid,
    pub listing_id: Uuid,
    pub host_id: Uuid,
    pub price_paid: f64,
    pub payment_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}
