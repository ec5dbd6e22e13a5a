//! Checkout and payment confirmation
//!
//! Payments are settled by an external hosted checkout. This module opens a
//! session for a booking and, once the customer returns, reads the session
//! back to mark the booking paid or failed.

mod gateway;
mod service;

#[cfg(test)]
mod tests;

pub use gateway::CheckoutGateway;
pub use service::PaymentService;
