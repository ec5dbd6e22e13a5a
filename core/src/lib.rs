//! # MauriRent Core
//!
//! Core business logic and domain layer for the MauriRent backend.
//! This crate contains the booking availability engine, payment
//! confirmation flow, repository interfaces, and error types that the
//! infrastructure and API crates build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Booking, PaymentStatus};
pub use domain::value_objects::*;
pub use errors::{DomainError, DomainResult, ValidationError};
pub use repositories::{BookingFilter, BookingPatch, BookingRepository, InMemoryBookingRepository};
pub use services::{
    BookingService, BookingServiceConfig, CheckoutGateway, ListingLocks, NewBooking, PaymentService,
};
