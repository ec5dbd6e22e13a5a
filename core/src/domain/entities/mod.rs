//! Domain entities representing core business objects.

pub mod booking;

// Re-export commonly used types
pub use booking::{storage_now, Booking, PaymentStatus};
