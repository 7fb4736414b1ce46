//! User business operations.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    /// Creates a user. Email and username uniqueness is enforced by the
    /// database constraints; a collision returns `Duplicate` naming the
    /// violated column.
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        self.repository.create(new_user).await
    }

    pub async fn get(&self, user_id: i64) -> AppResult<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: user_id.to_string(),
            })
    }

    pub async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> AppResult<Option<User>> {
        self.repository.find_by_email_or_username(email, username).await
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.list_all().await
    }

    /// Updates a user, verifying existence first so a missing id is a
    /// clean `NotFound` rather than a zero-row update. A body with no
    /// fields set is rejected before any query runs.
    pub async fn update(&self, user_id: i64, changes: UpdateUser) -> AppResult<User> {
        if changes.is_empty() {
            return Err(AppError::Validation {
                field: "body".to_string(),
                reason: "at least one field must be provided".to_string(),
            });
        }
        self.get(user_id).await?;
        self.repository.update(user_id, changes).await
    }

    /// Returns true when a row was deleted.
    pub async fn delete(&self, user_id: i64) -> AppResult<bool> {
        let affected = self.repository.delete(user_id).await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel_async::AsyncPgConnection;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;

    fn service() -> UserService {
        // build_unchecked hands out a pool without opening connections
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
            "postgres://localhost/bookstore_test",
        );
        let pool = bb8::Pool::builder().build_unchecked(manager);
        UserService::new(UserRepository::new(pool))
    }

    #[tokio::test]
    async fn test_update_with_no_fields_is_rejected() {
        let result = service().update(1, UpdateUser::default()).await;
        match result {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "body");
                assert_eq!(reason, "at least one field must be provided");
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
