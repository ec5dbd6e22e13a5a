//! Booking entity representing a reservation of a listing for a date range.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::BookingPeriod;

/// Settlement state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Created, not yet settled
    Pending,
    /// Settled by the checkout provider
    Paid,
    /// Checkout finished without settlement
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("Unknown payment status: {}", other)),
        }
    }
}

/// Current instant at the millisecond precision bookings are stored with
pub fn storage_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Booking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// Customer who requested the stay
    pub customer_id: Uuid,

    /// Owner of the listing
    pub host_id: Uuid,

    /// Listing being reserved
    pub listing_id: Uuid,

    /// First instant of the stay
    pub start_date: DateTime<Utc>,

    /// Last instant of the stay
    pub end_date: DateTime<Utc>,

    /// Price computed by the caller, never negative
    pub total_price: f64,

    /// Set when the customer asks for the booking to be removed
    pub deletion_requested: bool,

    /// Settlement state
    pub payment_status: PaymentStatus,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the booking was last updated
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking
    pub fn new(
        customer_id: Uuid,
        host_id: Uuid,
        listing_id: Uuid,
        period: BookingPeriod,
        total_price: f64,
    ) -> Self {
        let now = storage_now();
        Self {
            id: Uuid::new_v4(),
            customer_id,
            host_id,
            listing_id,
            start_date: period.start.trunc_subsecs(3),
            end_date: period.end.trunc_subsecs(3),
            total_price,
            deletion_requested: false,
            payment_status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// The stored date range
    ///
    /// Rows written by other tools may carry inverted dates, so this builds
    /// the struct directly instead of going through validation.
    pub fn period(&self) -> BookingPeriod {
        BookingPeriod {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Records external settlement
    pub fn mark_paid(&mut self) {
        self.payment_status = PaymentStatus::Paid;
        self.updated_at = storage_now();
    }

    /// Records an unsuccessful checkout
    pub fn mark_failed(&mut self) {
        self.payment_status = PaymentStatus::Failed;
        self.updated_at = storage_now();
    }

    /// Flags the booking for removal
    pub fn request_deletion(&mut self) {
        self.deletion_requested = true;
        self.updated_at = storage_now();
    }
}
