//! Service layer: business operations over the repositories.
//!
//! Services translate missing rows into `NotFound` errors and pass
//! constraint violations (already structured by the error converter)
//! through unchanged.

pub mod author_service;
pub mod book_service;
pub mod publisher_service;
pub mod user_service;

pub use author_service::AuthorService;
pub use book_service::BookService;
pub use publisher_service::PublisherService;
pub use user_service::UserService;

use crate::repositories::Repositories;

/// All services, cheap to clone into the application state.
#[derive(Clone)]
pub struct Services {
    pub authors: AuthorService,
    pub publishers: PublisherService,
    pub users: UserService,
    pub books: BookService,
}

impl Services {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            authors: AuthorService::new(repositories.authors),
            publishers: PublisherService::new(repositories.publishers),
            users: UserService::new(repositories.users),
            books: BookService::new(repositories.books),
        }
    }
}
