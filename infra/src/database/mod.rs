//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - MySQL repository implementations
//! - Storage backend selection

pub mod connection;
pub mod mysql;
pub mod store;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlBookingRepository;
pub use store::{create_booking_store, BookingStore};
