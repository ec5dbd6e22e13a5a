use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use rent_core::repositories::BookingRepository;
use rent_core::services::payment::CheckoutGateway;

use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

use super::AppState;

/// Handler for GET /api/v1/users/{user_id}/trips
///
/// Bookings the user made as a customer, earliest stay first.
pub async fn list_trips<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let user_id = path.into_inner();
    let trips = state.booking_service.list_customer_trips(user_id).await?;

    log::debug!("[{}] {} trips for user {}", req.request_id(), trips.len(), user_id);
    Ok(HttpResponse::Ok().json(trips))
}

/// Handler for GET /api/v1/users/{user_id}/reservations
///
/// Bookings on listings the user hosts.
pub async fn list_reservations<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let user_id = path.into_inner();
    let reservations = state.booking_service.list_host_reservations(user_id).await?;

    log::debug!(
        "[{}] {} reservations for host {}",
        req.request_id(),
        reservations.len(),
        user_id
    );
    Ok(HttpResponse::Ok().json(reservations))
}
