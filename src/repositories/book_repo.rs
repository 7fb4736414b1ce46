//! Book repository for database operations.

use crate::db::pool::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Book, NewBook};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Clone)]
pub struct BookRepository {
    pool: AsyncDbPool,
}

impl BookRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new book. A dangling author/publisher/user reference
    /// trips the foreign key and comes back as a validation error naming
    /// the offending column.
    pub async fn create(&self, new_book: NewBook) -> AppResult<Book> {
        use crate::schema::books::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::insert_into(books)
            .values(&new_book)
            .returning(Book::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, book_id: i64) -> AppResult<Option<Book>> {
        use crate::schema::books::dsl::*;

        let mut conn = self.pool.get().await?;
        books
            .filter(id.eq(book_id))
            .select(Book::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        use crate::schema::books::dsl::*;

        let mut conn = self.pool.get().await?;
        books
            .select(Book::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by id, returning the number of rows removed.
    pub async fn delete(&self, book_id: i64) -> AppResult<usize> {
        use crate::schema::books::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::delete(books.filter(id.eq(book_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
