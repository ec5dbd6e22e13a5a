pub mod booking;
pub mod error;
pub mod payment;

pub use booking::*;
pub use error::{error_codes, validation_error_response, ErrorResponse, ErrorResponseExt};
pub use payment::*;
