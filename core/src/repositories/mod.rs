pub mod booking;

pub use booking::{BookingFilter, BookingPatch, BookingRepository, InMemoryBookingRepository};
