//! Type definitions module
//!
//! - `response` - health check responses

pub mod response;

// Re-export commonly used types at module level
pub use response::{HealthResponse, HealthStatus, ServiceHealth};
