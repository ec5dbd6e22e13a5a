//! Value objects representing immutable domain concepts.

pub mod availability;
pub mod booking_period;
pub mod payment;

// Re-export commonly used types
pub use availability::{AvailabilityReport, BookedDates, ListingBookingStats};
pub use booking_period::{BookingPeriod, OverlapRule};
pub use payment::{
    CheckoutRequest, CheckoutSession, CheckoutSessionDetails, PaymentConfirmation,
    SessionPaymentState,
};
