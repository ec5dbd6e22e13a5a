//! Storage backend selected at startup

use async_trait::async_trait;
use uuid::Uuid;

use rent_core::domain::entities::Booking;
use rent_core::domain::value_objects::ListingBookingStats;
use rent_core::errors::DomainError;
use rent_core::repositories::{BookingFilter, BookingPatch, BookingRepository, InMemoryBookingRepository};
use rent_shared::config::{DatabaseConfig, StorageBackend};

use super::connection::DatabasePool;
use super::mysql::MySqlBookingRepository;

/// Booking repository chosen by `STORAGE_BACKEND`
pub enum BookingStore {
    MySql {
        repository: MySqlBookingRepository,
        pool: DatabasePool,
    },
    Memory(InMemoryBookingRepository),
}

impl BookingStore {
    /// Name reported by health checks
    pub fn backend_name(&self) -> &'static str {
        match self {
            BookingStore::MySql { .. } => "mysql",
            BookingStore::Memory(_) => "memory",
        }
    }

    /// Whether the backing store is reachable
    pub async fn is_healthy(&self) -> bool {
        match self {
            BookingStore::MySql { pool, .. } => pool.health_check().await.unwrap_or(false),
            BookingStore::Memory(_) => true,
        }
    }

    fn repository(&self) -> &dyn BookingRepository {
        match self {
            BookingStore::MySql { repository, .. } => repository,
            BookingStore::Memory(repository) => repository,
        }
    }
}

/// Build the repository for the configured backend
///
/// For MySQL this connects the pool and applies pending migrations.
pub async fn create_booking_store(config: &DatabaseConfig) -> Result<BookingStore, crate::InfrastructureError> {
    match config.backend {
        StorageBackend::MySql => {
            let pool = DatabasePool::new(config).await?;
            pool.run_migrations().await?;
            tracing::info!("{}", pool.get_statistics());
            Ok(BookingStore::MySql {
                repository: MySqlBookingRepository::new(pool.get_pool().clone()),
                pool,
            })
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory booking storage; data is lost on restart");
            Ok(BookingStore::Memory(InMemoryBookingRepository::new()))
        }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, DomainError> {
        self.repository().find(filter).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        self.repository().find_by_id(id).await
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        self.repository().insert(booking).await
    }

    async fn update_by_id(&self, id: Uuid, patch: BookingPatch) -> Result<Option<Booking>, DomainError> {
        self.repository().update_by_id(id, patch).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repository().delete_by_id(id).await
    }

    async fn stats_by_listing(&self) -> Result<Vec<ListingBookingStats>, DomainError> {
        self.repository().stats_by_listing().await
    }
}
