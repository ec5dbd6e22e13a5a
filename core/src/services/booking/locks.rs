//! Per-listing mutual exclusion for booking creation

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// One async mutex per listing, created on first use
///
/// Creations on different listings never wait on each other. The guard only
/// covers this process.
#[derive(Debug, Default)]
pub struct ListingLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl ListingLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `listing_id`
    ///
    /// The returned guard frees the listing's mutex entry when dropped, also
    /// when the holding future is cancelled.
    pub async fn acquire(&self, listing_id: Uuid) -> ListingGuard<'_> {
        // Clone the Arc out so the shard lock is released before awaiting
        let lock = self
            .locks
            .entry(listing_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        ListingGuard {
            locks: self,
            listing_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    /// Drop the mutex of a listing nobody is waiting on
    pub fn release_idle(&self, listing_id: Uuid) {
        self.locks
            .remove_if(&listing_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Number of listings with a live mutex
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one listing
pub struct ListingGuard<'a> {
    locks: &'a ListingLocks,
    listing_id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for ListingGuard<'_> {
    fn drop(&mut self) {
        // Unlock first so the entry's only owner is the map
        drop(self.guard.take());
        self.locks.release_idle(self.listing_id);
    }
}
