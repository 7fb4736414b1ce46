//! Author business operations.

use crate::error::{AppError, AppResult};
use crate::models::{Author, NewAuthor};
use crate::repositories::AuthorRepository;

#[derive(Clone)]
pub struct AuthorService {
    repository: AuthorRepository,
}

impl AuthorService {
    pub fn new(repository: AuthorRepository) -> Self {
        Self { repository }
    }

    /// Creates an author. Uniqueness of the name is enforced by the
    /// database; a collision returns `Duplicate` without any pre-check.
    pub async fn create(&self, new_author: NewAuthor) -> AppResult<Author> {
        self.repository.create(new_author).await
    }

    pub async fn get(&self, author_id: i64) -> AppResult<Author> {
        self.repository
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "author".to_string(),
                field: "id".to_string(),
                value: author_id.to_string(),
            })
    }

    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Author>> {
        self.repository.find_by_name(name).await
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.list_all().await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, author_id: i64) -> AppResult<bool> {
        let affected = self.repository.delete(author_id).await?;
        Ok(affected > 0)
    }
}
