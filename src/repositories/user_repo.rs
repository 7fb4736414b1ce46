//! User repository for database operations.

use crate::db::pool::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a new user. Email and username each carry a unique
    /// constraint; a collision comes back as `AppError::Duplicate` naming
    /// the violated column.
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn find_by_email_or_username(
        &self,
        user_email: &str,
        user_username: &str,
    ) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        users
            .filter(email.eq(user_email).or(username.eq(user_username)))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        users
            .select(User::as_select())
            .order(id.asc())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn update(&self, user_id: i64, changes: UpdateUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::update(users.filter(id.eq(user_id)))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Deletes by id, returning the number of rows removed.
    pub async fn delete(&self, user_id: i64) -> AppResult<usize> {
        use crate::schema::users::dsl::*;

        let mut conn = self.pool.get().await?;
        diesel::delete(users.filter(id.eq(user_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
