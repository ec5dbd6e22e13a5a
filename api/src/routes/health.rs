use actix_web::{web, HttpResponse};
use futures_util::future::BoxFuture;
use std::collections::HashMap;

use rent_core::repositories::BookingRepository;
use rent_core::services::payment::CheckoutGateway;
use rent_infra::{BookingStore, CheckoutProvider};
use rent_shared::types::{HealthResponse, HealthStatus, ServiceHealth};

use super::AppState;

/// A dependency that can report its own health
pub trait HealthIndicator: Send + Sync {
    /// Key under which the dependency is listed
    fn component(&self) -> &'static str;

    fn check(&self) -> BoxFuture<'_, ServiceHealth>;
}

impl HealthIndicator for BookingStore {
    fn component(&self) -> &'static str {
        "storage"
    }

    fn check(&self) -> BoxFuture<'_, ServiceHealth> {
        Box::pin(async move {
            let started = std::time::Instant::now();
            let mut health = if self.is_healthy().await {
                ServiceHealth::healthy()
            } else {
                ServiceHealth::unhealthy(format!("{} backend unreachable", self.backend_name()))
            };
            health.response_time_ms = Some(started.elapsed().as_millis() as u64);
            health
        })
    }
}

impl HealthIndicator for CheckoutProvider {
    fn component(&self) -> &'static str {
        "payments"
    }

    fn check(&self) -> BoxFuture<'_, ServiceHealth> {
        let provider = self.provider_name();
        Box::pin(async move {
            ServiceHealth {
                message: Some(provider.to_string()),
                ..ServiceHealth::healthy()
            }
        })
    }
}

/// Handler for GET /health
///
/// Answers 200 while every dependency is healthy and 503 otherwise.
pub async fn health_check<R, G>(state: web::Data<AppState<R, G>>) -> HttpResponse
where
    R: BookingRepository + HealthIndicator + 'static,
    G: CheckoutGateway + HealthIndicator + 'static,
{
    let repository = state.booking_service.repository();

    let mut services = HashMap::new();
    services.insert(repository.component().to_string(), repository.check().await);
    services.insert(state.gateway.component().to_string(), state.gateway.check().await);

    let health = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match health.status {
        HealthStatus::Unhealthy => {
            log::warn!("Health check failed: {:?}", health.services);
            HttpResponse::ServiceUnavailable().json(health)
        }
        _ => HttpResponse::Ok().json(health),
    }
}
