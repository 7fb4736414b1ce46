//! API layer: routing, handlers, DTOs, extractors, and middleware.

pub mod doc;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
