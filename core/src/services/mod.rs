//! Business services containing domain logic and use cases.

pub mod booking;
pub mod payment;

// Re-export commonly used types
pub use booking::{BookingService, BookingServiceConfig, ListingLocks, NewBooking};
pub use payment::{CheckoutGateway, PaymentService};
