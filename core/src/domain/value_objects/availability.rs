//! Results produced by the booking engine's read operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Booking;

/// Outcome of an availability check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Whether the requested range may be booked
    pub available: bool,

    /// Paid bookings blocking the range, empty when available
    pub conflicts: Vec<Booking>,
}

impl AvailabilityReport {
    pub fn available() -> Self {
        Self {
            available: true,
            conflicts: Vec::new(),
        }
    }

    pub fn blocked_by(conflicts: Vec<Booking>) -> Self {
        Self {
            available: false,
            conflicts,
        }
    }
}

/// A stored range shown on a listing calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDates {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<&Booking> for BookedDates {
    fn from(booking: &Booking) -> Self {
        Self {
            start_date: booking.start_date,
            end_date: booking.end_date,
        }
    }
}

/// Booking volume for one listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingBookingStats {
    pub listing_id: Uuid,
    pub total_bookings: u64,
    pub sum_booking_amount: f64,
}
