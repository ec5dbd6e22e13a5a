//! CORS middleware configuration for cross-origin requests.
//!
//! The listing frontend runs on its own origin, so every API route needs
//! CORS. Development accepts any origin; other environments only accept the
//! origins listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use rent_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for the given configuration.
///
/// A `*` entry in `allowed_origins` accepts any origin. Outside development
/// an empty origin list means browsers cannot call the API at all, which is
/// logged as a warning at startup.
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-request-id"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        if environment.is_production() {
            log::warn!("CORS accepts any origin in production");
        }
        cors = cors.allow_any_origin();
    } else {
        if config.allowed_origins.is_empty() && !environment.is_development() {
            log::warn!("No CORS origins configured; browser clients will be rejected");
        }
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
