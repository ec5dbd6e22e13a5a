//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the MauriRent
//! backend, following Clean Architecture principles. It provides concrete
//! implementations of the core repository and gateway traits.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL booking repository using SQLx, plus backend selection
//! - **Payment**: Stripe Checkout client over reqwest and an in-process mock
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Payment module - checkout provider clients
pub mod payment;

#[cfg(feature = "mysql")]
pub use database::{create_booking_store, BookingStore};
pub use payment::{create_checkout_gateway, CheckoutProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
