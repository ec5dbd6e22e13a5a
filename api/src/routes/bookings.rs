//! Booking route handlers
//!
//! Availability checks, creation, calendar data, statistics and removal of
//! bookings. Dates arrive as strings and are normalized to UTC here before
//! they reach the booking engine.

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use rent_core::errors::{DomainError, ValidationError};
use rent_core::repositories::BookingRepository;
use rent_core::services::booking::NewBooking;
use rent_core::services::payment::CheckoutGateway;
use rent_shared::dates::parse_instant;

use crate::dto::{
    AvailabilityResponse, BookedDatesResponse, BookingResponse, CheckAvailabilityRequest,
    CreateBookingRequest, MessageResponse,
};
use crate::handlers::ApiError;
use crate::middleware::RequestIdExt;

use super::AppState;

pub const BOOKING_CREATED_MESSAGE: &str = "Booking successfully created!";
pub const DATES_AVAILABLE_MESSAGE: &str = "Dates are available for booking.";
pub const PAID_CONFLICT_MESSAGE: &str =
    "The selected dates are not available because a paid booking already exists.";
pub const BOOKING_DELETED_MESSAGE: &str = "Booking deleted successfully";
pub const DELETION_REQUESTED_MESSAGE: &str = "Deletion request submitted";

/// Parse a client date, naming the offending field on failure
pub(crate) fn parse_date(field: &str, value: &str) -> Result<DateTime<Utc>, DomainError> {
    parse_instant(value).map_err(|err| {
        ValidationError::InvalidDate {
            field: field.to_string(),
            value: err.input,
        }
        .into()
    })
}

/// Handler for POST /api/v1/bookings/check
///
/// Only paid bookings make a range unavailable.
///
/// # Response
///
/// ## Available (200 OK)
/// ```json
/// { "available": true, "message": "Dates are available for booking." }
/// ```
///
/// ## Unavailable (200 OK)
/// ```json
/// {
///     "available": false,
///     "message": "The selected dates are not available because a paid booking already exists.",
///     "conflictingBookings": [ ... ]
/// }
/// ```
pub async fn check_availability<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<CheckAvailabilityRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let request_id = req.request_id();
    request.validate()?;

    let start_date = parse_date("startDate", &request.start_date)?;
    let end_date = parse_date("endDate", &request.end_date)?;

    let report = state
        .booking_service
        .check_overlap(request.listing_id, start_date, end_date)
        .await?;

    log::info!(
        "[{}] Availability for listing {}: {}",
        request_id,
        request.listing_id,
        report.available
    );

    let message = if report.available {
        DATES_AVAILABLE_MESSAGE
    } else {
        PAID_CONFLICT_MESSAGE
    };

    Ok(HttpResponse::Ok().json(AvailabilityResponse {
        available: report.available,
        message: message.to_string(),
        conflicting_bookings: report.conflicts,
    }))
}

/// Handler for POST /api/v1/bookings/create
///
/// Any existing booking on the listing that strictly overlaps the request,
/// paid or not, rejects it with 409 and the colliding bookings.
pub async fn create_booking<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    request: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let request_id = req.request_id();
    if let Err(errors) = request.validate() {
        log::warn!("[{}] Validation failed for create_booking: {}", request_id, errors);
        return Err(errors.into());
    }

    let request = request.into_inner();
    let new_booking = NewBooking {
        customer_id: request.customer_id,
        host_id: request.host_id,
        listing_id: request.listing_id,
        start_date: parse_date("startDate", &request.start_date)?,
        end_date: parse_date("endDate", &request.end_date)?,
        total_price: request.total_price,
    };

    log::info!(
        "[{}] Creating booking on listing {} for customer {}",
        request_id,
        new_booking.listing_id,
        new_booking.customer_id
    );

    match state.booking_service.create_booking(new_booking).await {
        Ok(booking) => Ok(HttpResponse::Ok().json(BookingResponse {
            message: BOOKING_CREATED_MESSAGE.to_string(),
            booking,
        })),
        Err(err) => {
            if err.is_conflict() {
                log::info!("[{}] Booking rejected: dates unavailable", request_id);
            }
            Err(err.into())
        }
    }
}

/// Handler for GET /api/v1/bookings/booked-dates/{listing_id}
pub async fn booked_dates<R, G>(
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let booked_dates = state.booking_service.list_booked_dates(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(BookedDatesResponse { booked_dates }))
}

/// Handler for GET /api/v1/bookings/average-per-property
///
/// Booking count and revenue per listing; 404 when nothing is booked.
pub async fn booking_stats<R, G>(state: web::Data<AppState<R, G>>) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let stats = state.booking_service.booking_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
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

/// Handler for DELETE /api/v1/bookings/{id}
///
/// Paid bookings are deleted like any other; nothing is refunded.
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

    log::info!("[{}] Deleted booking {}", req.request_id(), booking_id);
    Ok(HttpResponse::Ok().json(MessageResponse::new(BOOKING_DELETED_MESSAGE)))
}

/// Handler for PATCH /api/v1/bookings/{id}/deletion-request
pub async fn request_deletion<R, G>(
    req: HttpRequest,
    state: web::Data<AppState<R, G>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    R: BookingRepository + 'static,
    G: CheckoutGateway + 'static,
{
    let booking = state.booking_service.request_deletion(path.into_inner()).await?;

    log::info!("[{}] Deletion requested for booking {}", req.request_id(), booking.id);
    Ok(HttpResponse::Ok().json(BookingResponse {
        message: DELETION_REQUESTED_MESSAGE.to_string(),
        booking,
    }))
}
