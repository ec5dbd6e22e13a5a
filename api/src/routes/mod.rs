//! Route handlers
//!
//! - `bookings` - availability, creation, lookup and removal of bookings
//! - `users` - trips of a customer and reservations of a host
//! - `admin` - unrestricted booking listing and removal
//! - `payment` - checkout sessions and payment confirmation
//! - `health` - liveness and dependency health

pub mod admin;
pub mod bookings;
pub mod health;
pub mod payment;
pub mod users;

use std::sync::Arc;

use rent_core::repositories::BookingRepository;
use rent_core::services::booking::{BookingService, BookingServiceConfig};
use rent_core::services::payment::{CheckoutGateway, PaymentService};

pub use health::HealthIndicator;

/// Application state that holds shared services
pub struct AppState<R, G>
where
    R: BookingRepository,
    G: CheckoutGateway,
{
    pub booking_service: Arc<BookingService<R>>,
    pub payment_service: Arc<PaymentService<R, G>>,
    pub gateway: Arc<G>,
}

impl<R, G> AppState<R, G>
where
    R: BookingRepository,
    G: CheckoutGateway,
{
    /// Wire the booking engine and payment flow over one repository
    pub fn new(repository: Arc<R>, gateway: Arc<G>, config: BookingServiceConfig) -> Self {
        let booking_service = Arc::new(BookingService::new(repository, config));
        let payment_service = Arc::new(PaymentService::new(
            Arc::clone(&booking_service),
            Arc::clone(&gateway),
        ));

        Self {
            booking_service,
            payment_service,
            gateway,
        }
    }
}
