//! Book business operations.

use crate::error::{AppError, AppResult};
use crate::models::{Book, NewBook};
use crate::repositories::BookRepository;

#[derive(Clone)]
pub struct BookService {
    repository: BookRepository,
}

impl BookService {
    pub fn new(repository: BookRepository) -> Self {
        Self { repository }
    }

    /// Creates a book. Dangling author/publisher/user references trip the
    /// foreign keys and come back as validation errors.
    pub async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        self.repository.create(new_book).await
    }

    pub async fn get(&self, book_id: i64) -> AppResult<Book> {
        self.repository
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "book".to_string(),
                field: "id".to_string(),
                value: book_id.to_string(),
            })
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.list_all().await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, book_id: i64) -> AppResult<bool> {
        let affected = self.repository.delete(book_id).await?;
        Ok(affected > 0)
    }
}
