use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rent_core::domain::entities::Booking;
use rent_core::domain::value_objects::BookedDates;

/// Body of `POST /bookings/create`
///
/// Dates accept RFC 3339 timestamps, bare `YYYY-MM-DD` dates and
/// offset-less timestamps (read as UTC).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub customer_id: Uuid,
    pub host_id: Uuid,
    pub listing_id: Uuid,

    #[validate(length(min = 1, message = "startDate is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "endDate is required"))]
    pub end_date: String,

    #[validate(range(min = 0.0, message = "totalPrice must not be negative"))]
    pub total_price: f64,
}

/// Body of `POST /bookings/check`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    pub listing_id: Uuid,

    #[validate(length(min = 1, message = "startDate is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "endDate is required"))]
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicting_bookings: Vec<Booking>,
}

/// Body of a 409 from `POST /bookings/create`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConflictResponse {
    pub message: String,
    pub available: bool,
    pub conflicting_bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDatesResponse {
    pub booked_dates: Vec<BookedDates>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
