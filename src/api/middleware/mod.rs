//! HTTP middleware: request IDs, request/response logging, and the
//! `IntoResponse` mapping for `AppError`.

pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
