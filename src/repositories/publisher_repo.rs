//! Publisher repository for database operations.

use crate::db::pool::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewPublisher, Publisher};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Clone)]
pub struct PublisherRepository {
    pool: AsyncDbPool,
}

impl PublisherRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new publisher. Name and code each carry a unique
    /// constraint; the violated one is named in the resulting
    /// `AppError::Duplicate`.
    pub async fn create(&self, new_publisher: NewPublisher) -> AppResult<Publisher> {
        use crate::schema::publishers::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::insert_into(publishers)
            .values(&new_publisher)
            .returning(Publisher::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, publisher_id: i64) -> AppResult<Option<Publisher>> {
        use crate::schema::publishers::dsl::*;

        let mut conn = self.pool.get().await?;
        publishers
            .filter(id.eq(publisher_id))
            .select(Publisher::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_name_or_code(
        &self,
        publisher_name: &str,
        publisher_code: &str,
    ) -> AppResult<Option<Publisher>> {
        use crate::schema::publishers::dsl::*;

        let mut conn = self.pool.get().await?;
        publishers
            .filter(name.eq(publisher_name).or(code.eq(publisher_code)))
            .select(Publisher::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Publisher>> {
        use crate::schema::publishers::dsl::*;

        let mut conn = self.pool.get().await?;
        publishers
            .select(Publisher::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by id, returning the number of rows removed.
    pub async fn delete(&self, publisher_id: i64) -> AppResult<usize> {
        use crate::schema::publishers::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::delete(publishers.filter(id.eq(publisher_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
