pub mod error;

pub use error::{json_error_handler, path_error_handler, query_error_handler, to_http_response, ApiError};
