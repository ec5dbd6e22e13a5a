//! Shared utilities and common types for the MauriRent server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (date parsing)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BookingConfig, DatabaseConfig, Environment, LoggingConfig, PaymentConfig,
    PaymentProvider, ServerConfig, StorageBackend,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, HealthStatus, ServiceHealth};
pub use utils::dates;
