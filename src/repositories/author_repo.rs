//! Author repository for database operations.

use crate::db::pool::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Author, NewAuthor};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Clone)]
pub struct AuthorRepository {
    pool: AsyncDbPool,
}

impl AuthorRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new author. A duplicate name surfaces as a unique
    /// violation from the database, converted to `AppError::Duplicate`.
    pub async fn create(&self, new_author: NewAuthor) -> AppResult<Author> {
        use crate::schema::authors::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::insert_into(authors)
            .values(&new_author)
            .returning(Author::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, author_id: i64) -> AppResult<Option<Author>> {
        use crate::schema::authors::dsl::*;

        let mut conn = self.pool.get().await?;
        authors
            .filter(id.eq(author_id))
            .select(Author::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_name(&self, author_name: &str) -> AppResult<Option<Author>> {
        use crate::schema::authors::dsl::*;

        let mut conn = self.pool.get().await?;
        authors
            .filter(name.eq(author_name))
            .select(Author::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        use crate::schema::authors::dsl::*;

        let mut conn = self.pool.get().await?;
        authors
            .select(Author::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by id, returning the number of rows removed.
    pub async fn delete(&self, author_id: i64) -> AppResult<usize> {
        use crate::schema::authors::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::delete(authors.filter(id.eq(author_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
