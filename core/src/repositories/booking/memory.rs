//! In-memory implementation of BookingRepository
//!
//! Backs the server when `STORAGE_BACKEND=memory` and every engine test.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Booking;
use crate::domain::value_objects::ListingBookingStats;
use crate::errors::DomainError;

use super::trait_::{BookingFilter, BookingPatch, BookingRepository};

/// Process-local booking store
#[derive(Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
    unavailable: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryBookingRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-seeded with bookings
    pub fn with_bookings(bookings: impl IntoIterator<Item = Booking>) -> Self {
        let map = bookings.into_iter().map(|b| (b.id, b)).collect();
        Self {
            bookings: Arc::new(RwLock::new(map)),
            ..Default::default()
        }
    }

    /// Simulate a storage outage; every call fails while set
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful inserts, updates and deletes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::persistence("in-memory store marked unavailable"));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, DomainError> {
        self.ensure_available()?;
        let bookings = self.bookings.read().await;
        let mut found: Vec<Booking> = bookings
            .values()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(found)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        self.ensure_available()?;
        let bookings = self.bookings.read().await;
        Ok(bookings.get(&id).cloned())
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        self.ensure_available()?;
        let mut bookings = self.bookings.write().await;

        if bookings.contains_key(&booking.id) {
            return Err(DomainError::persistence(format!(
                "duplicate booking id {}",
                booking.id
            )));
        }

        bookings.insert(booking.id, booking.clone());
        self.record_write();
        Ok(booking)
    }

    async fn update_by_id(&self, id: Uuid, patch: BookingPatch) -> Result<Option<Booking>, DomainError> {
        self.ensure_available()?;
        let mut bookings = self.bookings.write().await;

        match bookings.get_mut(&id) {
            Some(existing) => {
                if patch.apply(existing) {
                    self.record_write();
                }
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.ensure_available()?;
        let mut bookings = self.bookings.write().await;
        let removed = bookings.remove(&id).is_some();
        if removed {
            self.record_write();
        }
        Ok(removed)
    }

    async fn stats_by_listing(&self) -> Result<Vec<ListingBookingStats>, DomainError> {
        self.ensure_available()?;
        let bookings = self.bookings.read().await;

        let mut grouped: HashMap<Uuid, ListingBookingStats> = HashMap::new();
        for booking in bookings.values() {
            let entry = grouped
                .entry(booking.listing_id)
                .or_insert_with(|| ListingBookingStats {
                    listing_id: booking.listing_id,
                    total_bookings: 0,
                    sum_booking_amount: 0.0,
                });
            entry.total_bookings += 1;
            entry.sum_booking_amount += booking.total_price;
        }

        let mut stats: Vec<ListingBookingStats> = grouped.into_values().collect();
        stats.sort_by(|a, b| {
            b.total_bookings
                .cmp(&a.total_bookings)
                .then_with(|| a.listing_id.cmp(&b.listing_id))
        });
        Ok(stats)
    }
}
