//! Request and response DTOs for the REST API.
//!
//! Conversions to and from the database models happen here, at the API
//! boundary; handlers never hand diesel models to clients directly.

pub mod author;
pub mod book;
pub mod error;
pub mod publisher;
pub mod user;

pub use author::{AuthorResponse, CreateAuthorRequest};
pub use book::{BookResponse, CreateBookRequest};
pub use error::ErrorResponse;
pub use publisher::{CreatePublisherRequest, PublisherResponse};
pub use user::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
