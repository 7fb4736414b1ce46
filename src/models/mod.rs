//! Database models for the catalog entities.

pub mod author;
pub mod book;
pub mod publisher;
pub mod user;

pub use author::{Author, NewAuthor};
pub use book::{Book, NewBook};
pub use publisher::{NewPublisher, Publisher};
pub use user::{Gender, NewUser, UpdateUser, User};
