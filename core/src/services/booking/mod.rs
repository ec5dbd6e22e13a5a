//! Booking availability engine
//!
//! This module decides whether a listing may be booked for a date range and
//! admits new bookings without violating the overlap invariants:
//! - Availability checks only consider paid bookings (inclusive boundaries)
//! - Creation rejects any stored booking colliding with the request
//!   (exclusive boundaries), whatever its payment state
//! - Check-and-insert is serialized per listing

mod config;
mod locks;
mod service;

#[cfg(test)]
mod tests;

pub use config::BookingServiceConfig;
pub use locks::{ListingGuard, ListingLocks};
pub use service::{BookingService, NewBooking, DATES_UNAVAILABLE_MESSAGE, NO_BOOKINGS_MESSAGE};
