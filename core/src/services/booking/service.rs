//! Main booking service implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Booking, PaymentStatus};
use crate::domain::value_objects::{
    AvailabilityReport, BookedDates, BookingPeriod, ListingBookingStats,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{BookingFilter, BookingPatch, BookingRepository};

use super::config::BookingServiceConfig;
use super::locks::ListingLocks;

/// Message carried by a creation conflict
pub const DATES_UNAVAILABLE_MESSAGE: &str = "The selected dates are not available for this property.";

/// Not-found message when statistics are requested over an empty store
pub const NO_BOOKINGS_MESSAGE: &str = "No bookings data available";

/// Everything needed to admit a booking
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer_id: Uuid,
    pub host_id: Uuid,
    pub listing_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
}

/// Booking availability engine
///
/// Holds no booking state of its own; every decision is made against the
/// repository at call time.
pub struct BookingService<R>
where
    R: BookingRepository,
{
    /// Booking persistence
    repository: Arc<R>,
    /// Per-listing creation locks
    locks: ListingLocks,
    /// Service configuration
    config: BookingServiceConfig,
}

impl<R> BookingService<R>
where
    R: BookingRepository,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage for bookings
    /// * `config` - Overlap rules and serialization switch
    pub fn new(repository: Arc<R>, config: BookingServiceConfig) -> Self {
        Self {
            repository,
            locks: ListingLocks::new(),
            config,
        }
    }

    pub fn config(&self) -> &BookingServiceConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Decide whether a date range on a listing is free of paid bookings
    ///
    /// Unpaid bookings never make a range unavailable here, even when they
    /// overlap it.
    ///
    /// # Returns
    ///
    /// * `Ok(AvailabilityReport)` - `available = false` with the paid
    ///   bookings colliding under the availability rule, otherwise
    ///   `available = true` and no conflicts
    /// * `Err(DomainError)` - Invalid range or storage failure
    pub async fn check_overlap(
        &self,
        listing_id: Uuid,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> DomainResult<AvailabilityReport> {
        let period = BookingPeriod::new(start_date, end_date)?;

        let filter = BookingFilter::for_listing(listing_id)
            .overlapping(period, self.config.availability_rule)
            .with_status(PaymentStatus::Paid);
        let conflicts = self.repository.find(&filter).await?;

        tracing::debug!(
            listing_id = %listing_id,
            start = %period.start,
            end = %period.end,
            conflicts = conflicts.len(),
            event = "availability_checked",
            "Checked listing availability"
        );

        if conflicts.is_empty() {
            Ok(AvailabilityReport::available())
        } else {
            Ok(AvailabilityReport::blocked_by(conflicts))
        }
    }

    /// Admit a new pending booking
    ///
    /// This method:
    /// 1. Validates the date range and price
    /// 2. Takes the listing lock when serialization is enabled
    /// 3. Looks for any stored booking colliding under the creation rule,
    ///    regardless of payment status
    /// 4. Inserts the booking when nothing collides
    ///
    /// # Returns
    ///
    /// * `Ok(Booking)` - The stored pending booking
    /// * `Err(DomainError::Conflict)` - Colliding bookings, nothing written
    /// * `Err(DomainError)` - Validation or storage failure
    pub async fn create_booking(&self, request: NewBooking) -> DomainResult<Booking> {
        let period = BookingPeriod::new(request.start_date, request.end_date)?;
        validate_price(request.total_price)?;

        let _guard = if self.config.serialize_per_listing {
            Some(self.locks.acquire(request.listing_id).await)
        } else {
            None
        };

        self.admit(request, period).await
    }

    async fn admit(&self, request: NewBooking, period: BookingPeriod) -> DomainResult<Booking> {
        let filter = BookingFilter::for_listing(request.listing_id)
            .overlapping(period, self.config.creation_rule);
        let conflicts = self.repository.find(&filter).await?;

        if !conflicts.is_empty() {
            tracing::info!(
                listing_id = %request.listing_id,
                customer_id = %request.customer_id,
                conflicts = conflicts.len(),
                event = "booking_conflict",
                "Rejected booking for unavailable dates"
            );
            return Err(DomainError::Conflict {
                message: DATES_UNAVAILABLE_MESSAGE.to_string(),
                conflicts,
            });
        }

        let booking = Booking::new(
            request.customer_id,
            request.host_id,
            request.listing_id,
            period,
            request.total_price,
        );
        let booking = self.repository.insert(booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            listing_id = %booking.listing_id,
            customer_id = %booking.customer_id,
            nights = period.nights(),
            event = "booking_created",
            "Created pending booking"
        );

        Ok(booking)
    }

    /// Record external settlement; overlap is not re-validated
    pub async fn mark_paid(&self, booking_id: Uuid) -> DomainResult<Booking> {
        let booking = self
            .set_payment_status(booking_id, PaymentStatus::Paid)
            .await?;

        tracing::info!(
            booking_id = %booking_id,
            listing_id = %booking.listing_id,
            event = "booking_paid",
            "Marked booking as paid"
        );
        Ok(booking)
    }

    /// Record an unsuccessful checkout
    ///
    /// Only pending bookings become failed. A booking that is already paid
    /// or failed is returned as stored.
    pub async fn mark_failed(&self, booking_id: Uuid) -> DomainResult<Booking> {
        let patch = BookingPatch::payment_status(PaymentStatus::Failed).when_status(PaymentStatus::Pending);
        let booking = self
            .repository
            .update_by_id(booking_id, patch)
            .await?
            .ok_or_else(|| DomainError::booking_not_found(booking_id))?;

        if booking.payment_status == PaymentStatus::Failed {
            tracing::warn!(
                booking_id = %booking_id,
                event = "booking_payment_failed",
                "Marked booking payment as failed"
            );
        } else {
            tracing::info!(
                booking_id = %booking_id,
                payment_status = %booking.payment_status,
                event = "booking_payment_failure_ignored",
                "Kept settled booking despite unpaid checkout"
            );
        }
        Ok(booking)
    }

    async fn set_payment_status(&self, booking_id: Uuid, status: PaymentStatus) -> DomainResult<Booking> {
        self.repository
            .update_by_id(booking_id, BookingPatch::payment_status(status))
            .await?
            .ok_or_else(|| DomainError::booking_not_found(booking_id))
    }

    /// Remove a booking unconditionally
    ///
    /// Paid bookings are removed like any other; no refund is issued.
    pub async fn delete_booking(&self, booking_id: Uuid) -> DomainResult<()> {
        if !self.repository.delete_by_id(booking_id).await? {
            return Err(DomainError::booking_not_found(booking_id));
        }

        tracing::info!(
            booking_id = %booking_id,
            event = "booking_deleted",
            "Deleted booking"
        );
        Ok(())
    }

    /// Every stored range on a listing, paid or not, unmerged
    pub async fn list_booked_dates(&self, listing_id: Uuid) -> DomainResult<Vec<BookedDates>> {
        let bookings = self
            .repository
            .find(&BookingFilter::for_listing(listing_id))
            .await?;
        Ok(bookings.iter().map(BookedDates::from).collect())
    }

    pub async fn get_booking(&self, booking_id: Uuid) -> DomainResult<Booking> {
        self.repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::booking_not_found(booking_id))
    }

    /// Bookings made by a customer
    pub async fn list_customer_trips(&self, customer_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.repository
            .find(&BookingFilter::for_customer(customer_id))
            .await
    }

    /// Bookings on listings owned by a host
    pub async fn list_host_reservations(&self, host_id: Uuid) -> DomainResult<Vec<Booking>> {
        self.repository.find(&BookingFilter::for_host(host_id)).await
    }

    pub async fn list_all_bookings(&self) -> DomainResult<Vec<Booking>> {
        self.repository.find(&BookingFilter::all()).await
    }

    /// Flag a booking for removal; the engine itself ignores the flag
    pub async fn request_deletion(&self, booking_id: Uuid) -> DomainResult<Booking> {
        let booking = self
            .repository
            .update_by_id(booking_id, BookingPatch::deletion_requested(true))
            .await?
            .ok_or_else(|| DomainError::booking_not_found(booking_id))?;

        tracing::info!(
            booking_id = %booking_id,
            event = "booking_deletion_requested",
            "Customer requested booking deletion"
        );
        Ok(booking)
    }

    /// Booking count and revenue per listing
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ListingBookingStats>)` - Busiest listings first
    /// * `Err(DomainError::NotFound)` - No bookings stored at all
    pub async fn booking_stats(&self) -> DomainResult<Vec<ListingBookingStats>> {
        let stats = self.repository.stats_by_listing().await?;
        if stats.is_empty() {
            return Err(DomainError::NotFound {
                message: NO_BOOKINGS_MESSAGE.to_string(),
            });
        }
        Ok(stats)
    }
}

fn validate_price(total_price: f64) -> Result<(), ValidationError> {
    if !total_price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "totalPrice".to_string(),
        });
    }
    if total_price < 0.0 {
        return Err(ValidationError::NegativeAmount {
            field: "totalPrice".to_string(),
        });
    }
    Ok(())
}
