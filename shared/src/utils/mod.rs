//! Common utility functions

pub mod dates;

// Re-export commonly used utilities
pub use dates::*;
