//! MySQL implementation of the BookingRepository trait.
//!
//! Ids are stored as 36-character strings and instants as `DATETIME(3)` in
//! UTC. Filters are translated into a single parameterized `SELECT`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySql, MySqlPool, QueryBuilder, Row};
use uuid::Uuid;

use rent_core::domain::entities::{storage_now, Booking, PaymentStatus};
use rent_core::domain::value_objects::{ListingBookingStats, OverlapRule};
use rent_core::errors::DomainError;
use rent_core::repositories::{BookingFilter, BookingPatch, BookingRepository};

const BOOKING_COLUMNS: &str = "id, customer_id, host_id, listing_id, start_date, end_date, \
     total_price, deletion_requested, payment_status, created_at, updated_at";

/// Raw column values of one `bookings` row
#[derive(Debug, Clone)]
pub(crate) struct BookingRow {
    pub id: String,
    pub customer_id: String,
    pub host_id: String,
    pub listing_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: f64,
    pub deletion_requested: bool,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingRow {
    fn from_row(row: &MySqlRow) -> Result<Self, DomainError> {
        fn col<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
        where
            T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
        {
            row.try_get(name)
                .map_err(|e| DomainError::persistence(format!("Failed to get {}: {}", name, e)))
        }

        Ok(Self {
            id: col(row, "id")?,
            customer_id: col(row, "customer_id")?,
            host_id: col(row, "host_id")?,
            listing_id: col(row, "listing_id")?,
            start_date: col(row, "start_date")?,
            end_date: col(row, "end_date")?,
            total_price: col(row, "total_price")?,
            deletion_requested: col(row, "deletion_requested")?,
            payment_status: col(row, "payment_status")?,
            created_at: col(row, "created_at")?,
            updated_at: col(row, "updated_at")?,
        })
    }
}

fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value)
        .map_err(|e| DomainError::persistence(format!("Invalid {} UUID {:?}: {}", column, value, e)))
}

impl TryFrom<BookingRow> for Booking {
    type Error = DomainError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            id: parse_uuid("id", &row.id)?,
            customer_id: parse_uuid("customer_id", &row.customer_id)?,
            host_id: parse_uuid("host_id", &row.host_id)?,
            listing_id: parse_uuid("listing_id", &row.listing_id)?,
            start_date: row.start_date,
            end_date: row.end_date,
            total_price: row.total_price,
            deletion_requested: row.deletion_requested,
            payment_status: row
                .payment_status
                .parse::<PaymentStatus>()
                .map_err(DomainError::persistence)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Translate a filter into a `SELECT` over the bookings table
pub(crate) fn build_find_query(filter: &BookingFilter) -> QueryBuilder<'static, MySql> {
    let mut query = QueryBuilder::new(format!("SELECT {} FROM bookings WHERE 1 = 1", BOOKING_COLUMNS));

    if let Some(listing_id) = filter.listing_id {
        query.push(" AND listing_id = ").push_bind(listing_id.to_string());
    }
    if let Some(customer_id) = filter.customer_id {
        query.push(" AND customer_id = ").push_bind(customer_id.to_string());
    }
    if let Some(host_id) = filter.host_id {
        query.push(" AND host_id = ").push_bind(host_id.to_string());
    }
    if let Some(status) = filter.payment_status {
        query.push(" AND payment_status = ").push_bind(status.as_str());
    }
    if let Some((period, rule)) = filter.overlapping {
        let (before, after) = match rule {
            OverlapRule::Inclusive => (" AND start_date <= ", " AND end_date >= "),
            OverlapRule::Exclusive => (" AND start_date < ", " AND end_date > "),
        };
        query.push(before).push_bind(period.end);
        query.push(after).push_bind(period.start);
    }

    query.push(" ORDER BY start_date ASC, created_at ASC");
    query
}

/// Translate a patch into an `UPDATE` touching only the columns it sets
///
/// The caller must not pass an empty patch.
pub(crate) fn build_update_query(
    id: Uuid,
    patch: &BookingPatch,
    updated_at: DateTime<Utc>,
) -> QueryBuilder<'static, MySql> {
    let mut query = QueryBuilder::new("UPDATE bookings SET updated_at = ");
    query.push_bind(updated_at);

    if let Some(status) = patch.payment_status {
        query.push(", payment_status = ").push_bind(status.as_str());
    }
    if let Some(flag) = patch.deletion_requested {
        query.push(", deletion_requested = ").push_bind(flag);
    }

    query.push(" WHERE id = ").push_bind(id.to_string());
    if let Some(expected) = patch.expected_status {
        query.push(" AND payment_status = ").push_bind(expected.as_str());
    }
    query
}

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
        BookingRow::from_row(row)?.try_into()
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find(&self, filter: &BookingFilter) -> Result<Vec<Booking>, DomainError> {
        let mut query = build_find_query(filter);
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to query bookings: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ? LIMIT 1", BOOKING_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to find booking by id: {}", e)))?;

        result.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn insert(&self, booking: Booking) -> Result<Booking, DomainError> {
        let query = r#"
            INSERT INTO bookings (
                id, customer_id, host_id, listing_id, start_date, end_date,
                total_price, deletion_requested, payment_status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.customer_id.to_string())
            .bind(booking.host_id.to_string())
            .bind(booking.listing_id.to_string())
            .bind(booking.start_date)
            .bind(booking.end_date)
            .bind(booking.total_price)
            .bind(booking.deletion_requested)
            .bind(booking.payment_status.as_str())
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to insert booking: {}", e)))?;

        Ok(booking)
    }

    async fn update_by_id(&self, id: Uuid, patch: BookingPatch) -> Result<Option<Booking>, DomainError> {
        if !patch.is_empty() {
            build_update_query(id, &patch, storage_now())
                .build()
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::persistence(format!("Failed to update booking: {}", e)))?;
        }

        // A guarded patch that matched nothing leaves the row as it was
        self.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to delete booking: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn stats_by_listing(&self) -> Result<Vec<ListingBookingStats>, DomainError> {
        let query = r#"
            SELECT listing_id,
                   COUNT(*) AS total_bookings,
                   SUM(total_price) AS sum_booking_amount
            FROM bookings
            GROUP BY listing_id
            ORDER BY total_bookings DESC, listing_id ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::persistence(format!("Failed to aggregate bookings: {}", e)))?;

        rows.iter()
            .map(|row| {
                let listing_id: String = row
                    .try_get("listing_id")
                    .map_err(|e| DomainError::persistence(format!("Failed to get listing_id: {}", e)))?;
                let total_bookings: i64 = row
                    .try_get("total_bookings")
                    .map_err(|e| DomainError::persistence(format!("Failed to get total_bookings: {}", e)))?;
                let sum_booking_amount: f64 = row
                    .try_get("sum_booking_amount")
                    .map_err(|e| DomainError::persistence(format!("Failed to get sum_booking_amount: {}", e)))?;

                Ok(ListingBookingStats {
                    listing_id: parse_uuid("listing_id", &listing_id)?,
                    total_bookings: total_bookings.max(0) as u64,
                    sum_booking_amount,
                })
            })
            .collect()
    }
}
