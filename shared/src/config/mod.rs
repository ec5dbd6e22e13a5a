//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `booking` - Overlap rules and per-listing serialization for the booking engine
//! - `database` - Storage backend selection, connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `payment` - Checkout provider selection and credentials
//! - `server` - HTTP server and CORS configuration

pub mod booking;
pub mod database;
pub mod environment;
pub mod payment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use booking::{BookingConfig, OverlapRuleSetting};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use payment::{PaymentConfig, PaymentProvider};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Booking engine configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// Checkout provider configuration
    #[serde(default)]
    pub payment: PaymentConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            booking: BookingConfig::default(),
            payment: PaymentConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig::new("127.0.0.1", 3001),
            database: DatabaseConfig::new("mysql://localhost:3306/home_rental_dev")
                .with_backend(StorageBackend::Memory),
            booking: BookingConfig::default(),
            payment: PaymentConfig::default(),
            cors: CorsConfig::development(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 3001),
            database: DatabaseConfig::new("mysql://prod-db:3306/home_rental")
                .with_max_connections(50),
            booking: BookingConfig::default(),
            payment: PaymentConfig {
                provider: PaymentProvider::Stripe,
                ..Default::default()
            },
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Production),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the preset for the detected environment and overrides
    /// each section with whatever the corresponding variables provide.
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        let mut config = match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => {
                let mut config = Self::development();
                config.environment = Environment::Staging;
                config.logging = LoggingConfig::for_environment(Environment::Staging);
                config
            }
        };

        config.server = ServerConfig::from_env_or(config.server);
        config.database = DatabaseConfig::from_env_or(config.database);
        config.booking = BookingConfig::from_env_or(config.booking);
        config.payment = PaymentConfig::from_env_or(config.payment);
        config.cors = CorsConfig::from_env_or(config.cors);
        config.logging = LoggingConfig::from_env_or(config.logging);
        config
    }
}
