//! Startup configuration and logger setup for the API binary

use std::io::Write;

use env_logger::{Builder, Env};
use rent_shared::config::{AppConfig, Environment, LogFormat, LoggingConfig};

/// Load `.env` files and build the application configuration
///
/// The environment specific file (`.env.production`, ...) is read first so
/// its values win over the generic `.env`; variables already set in the
/// process environment win over both.
pub fn load() -> AppConfig {
    dotenv::from_filename(Environment::from_env().env_file()).ok();
    dotenv::dotenv().ok();
    AppConfig::from_env()
}

/// Initialize `env_logger` from the logging section
///
/// `RUST_LOG` still overrides the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let mut builder = Builder::from_env(Env::new().default_filter_or(config.level.as_str()));

    match config.format {
        LogFormat::Json => {
            let timestamp = config.timestamp;
            builder.format(move |buf, record| {
                let mut line = serde_json::json!({
                    "level": record.level().to_string(),
                    "target": record.target(),
                    "message": record.args().to_string(),
                });
                if timestamp {
                    line["timestamp"] = serde_json::json!(chrono::Utc::now().to_rfc3339());
                }
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Compact => {
            builder.format_target(false).format_module_path(false);
        }
        LogFormat::Pretty => {}
    }

    if !config.timestamp {
        builder.format_timestamp(None);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
