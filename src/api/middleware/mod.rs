//! Middleware components for request processing.
//!
//! Request ID tracking, request logging and the `AppError` to HTTP response
//! conversion.

mod error_handler;
mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, current_request_id, request_id_middleware};
