//! Publisher business operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewPublisher, Publisher};
use crate::repositories::PublisherRepository;

#[derive(Clone)]
pub struct PublisherService {
    repository: PublisherRepository,
}

impl PublisherService {
    pub fn new(repository: PublisherRepository) -> Self {
        Self { repository }
    }

    /// Creates a publisher in a single insert. The unique constraints on
    /// name and code are authoritative; whichever trips is the one the
    /// resulting `Duplicate` error names.
    pub async fn create(&self, new_publisher: NewPublisher) -> AppResult<Publisher> {
        self.repository.create(new_publisher).await
    }

    pub async fn get(&self, publisher_id: i64) -> AppResult<Publisher> {
        self.repository
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "publisher".to_string(),
                field: "id".to_string(),
                value: publisher_id.to_string(),
            })
    }

    pub async fn find_by_name_or_code(
        &self,
        name: &str,
        code: &str,
    ) -> AppResult<Option<Publisher>> {
        self.repository.find_by_name_or_code(name, code).await
    }

    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        self.repository.list_all().await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, publisher_id: i64) -> AppResult<bool> {
        let affected = self.repository.delete(publisher_id).await?;
        Ok(affected > 0)
    }
}
