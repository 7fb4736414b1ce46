//! Repository layer: diesel queries over the async connection pool.

pub mod author_repo;
pub mod book_repo;
pub mod publisher_repo;
pub mod user_repo;

pub use author_repo::AuthorRepository;
pub use book_repo::BookRepository;
pub use publisher_repo::PublisherRepository;
pub use user_repo::UserRepository;

use crate::db::pool::AsyncDbPool;

/// All repositories, cheap to clone into handlers and services.
#[derive(Clone)]
pub struct Repositories {
    pub authors: AuthorRepository,
    pub publishers: PublisherRepository,
    pub users: UserRepository,
    pub books: BookRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            authors: AuthorRepository::new(pool.clone()),
            publishers: PublisherRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            books: BookRepository::new(pool),
        }
    }
}
