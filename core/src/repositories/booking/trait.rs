//! Booking repository trait defining the interface for booking persistence.
//!
//! The booking engine only ever talks to storage through this trait, so the
//! MySQL implementation and the in-memory one are interchangeable.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{storage_now, Booking, PaymentStatus};
use crate::domain::value_objects::{BookingPeriod, ListingBookingStats, OverlapRule};
use crate::errors::DomainError;

/// Query over stored bookings; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub listing_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub host_id: Option<Uuid>,
    pub payment_status: Option<PaymentStatus>,
    /// Only bookings colliding with this period under this rule
    pub overlapping: Option<(BookingPeriod, OverlapRule)>,
}

impl BookingFilter {
    /// Match every booking
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_listing(listing_id: Uuid) -> Self {
        Self {
            listing_id: Some(listing_id),
            ..Default::default()
        }
    }

    pub fn for_customer(customer_id: Uuid) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Default::default()
        }
    }

    pub fn for_host(host_id: Uuid) -> Self {
        Self {
            host_id: Some(host_id),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    pub fn overlapping(mut self, period: BookingPeriod, rule: OverlapRule) -> Self {
        self.overlapping = Some((period, rule));
        self
    }

    /// Evaluate the filter against a booking held in memory
    pub fn matches(&self, booking: &Booking) -> bool {
        self.listing_id.map_or(true, |id| booking.listing_id == id)
            && self.customer_id.map_or(true, |id| booking.customer_id == id)
            && self.host_id.map_or(true, |id| booking.host_id == id)
            && self
                .payment_status
                .map_or(true, |status| booking.payment_status == status)
            && self
                .overlapping
                .map_or(true, |(period, rule)| booking.period().overlaps(&period, rule))
    }
}

/// Partial update applied by `update_by_id`
///
/// Only the fields that are set are written. With `expected_status` set the
/// patch is applied only while the booking still has that payment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub payment_status: Option<PaymentStatus>,
    pub deletion_requested: Option<bool>,
    pub expected_status: Option<PaymentStatus>,
}

impl BookingPatch {
    pub fn payment_status(status: PaymentStatus) -> Self {
        Self {
            payment_status: Some(status),
            ..Default::default()
        }
    }

    pub fn deletion_requested(flag: bool) -> Self {
        Self {
            deletion_requested: Some(flag),
            ..Default::default()
        }
    }

    /// Apply only to bookings currently in `status`
    pub fn when_status(mut self, status: PaymentStatus) -> Self {
        self.expected_status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.payment_status.is_none() && self.deletion_requested.is_none()
    }

    /// Whether the precondition holds for the booking
    pub fn permits(&self, booking: &Booking) -> bool {
        self.expected_status
            .map_or(true, |status| booking.payment_status == status)
    }

    /// Apply the patch to a booking, bumping `updated_at` when anything changes
    ///
    /// Returns `false` and leaves the booking untouched when the precondition
    /// does not hold.
    pub fn apply(&self, booking: &mut Booking) -> bool {
        if self.is_empty() || !self.permits(booking) {
            return false;
        }
        match self.payment_status {
            Some(PaymentStatus::Paid) => booking.mark_paid(),
            Some(PaymentStatus::Failed) => booking.mark_failed(),
            Some(PaymentStatus::Pending) => {
                booking.payment_status = PaymentStatus::Pending;
                booking.updated_at = storage_now();
            }
            None => {}
        }
        match self.deletion_requested {
            Some(true) => booking.request_deletion(),
            Some(false) => {
                booking.deletion_requested = false;
                booking.updated_at = storage_now();
            }
            None => {}
        }
        true
    }
}

/// Repository trait for Booking persistence operations
///
/// Result sets from `find` are ordered by start date, then creation time.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find every booking matching the filter
    ///
    /// # Returns
    /// * `Ok(Vec<Booking>)` - Matching bookings, possibly empty
    /// * `Err(DomainError::Persistence)` - Storage failure
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, DomainError>;

    /// Find a booking by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - Booking found
    /// * `Ok(None)` - No booking with given ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Persist a new booking
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored booking
    /// * `Err(DomainError)` - Insert failed (e.g., duplicate id)
    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Apply a patch to the booking with the given id
    ///
    /// Implementations write only the fields the patch sets, atomically with
    /// the `expected_status` check.
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - The booking as stored afterwards, unchanged when
    ///   the precondition did not hold
    /// * `Ok(None)` - No booking with given ID
    async fn update_by_id(&self, id: Uuid, patch: BookingPatch) -> Result<Option<Booking>, DomainError>;

    /// Delete a booking
    ///
    /// # Returns
    /// * `Ok(true)` - Booking was deleted
    /// * `Ok(false)` - Booking not found
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Count and total price of bookings grouped by listing
    async fn stats_by_listing(&self) -> Result<Vec<ListingBookingStats>, DomainError>;
}
