//! Administrative booking handlers
//!
//! No authorization is applied here; deployments put these routes behind
//! their own gateway.

use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use rent_core::repositories::BookingRepository;
use rent_core::services::payment::CheckoutGateway;

use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

use super::AppState;

pub async fn list_bookings<R, G>(state: web::Data<AppState<R, G>>) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let bookings = state.booking_service.list_all_bookings().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

pub async fn get_booking<R, G>(
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let booking = state.booking_service.get_booking(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Handler for DELETE /api/v1/admin/bookings/{id}
///
/// Answers 204 with no body on success.
pub async fn delete_booking<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let booking_id = path.into_inner();
    state.booking_service.delete_booking(booking_id).await?;

    log::warn!("[{}] Admin deleted booking {}", req.request_id(), booking_id);
    Ok(HttpResponse::NoContent().finish())
}
