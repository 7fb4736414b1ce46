//! User API request/response types.
//!
//! Create and update respond with a human-readable message rather than
//! the full record; reads return `UserResponse`, which never carries the
//! password.

use crate::models::{Gender, NewUser, UpdateUser, User};
use jiff_diesel::ToDiesel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
    pub gender: Gender,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 3, max = 255, message = "username must be between 3 and 255 characters"))]
    pub username: String,
    #[validate(length(min = 6, max = 255, message = "password must be at least 6 characters"))]
    pub password: String,
    /// Date of birth, ISO 8601 (`YYYY-MM-DD`)
    #[schema(value_type = String, format = Date)]
    pub birthdate: jiff::civil::Date,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            age: self.age,
            gender: self.gender,
            email: self.email,
            username: self.username,
            password: self.password,
            birthdate: self.birthdate.to_diesel(),
        }
    }
}

/// Request body for updating a user; omitted fields are left unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 255, message = "username must be between 3 and 255 characters"))]
    pub username: Option<String>,
    #[validate(length(min = 6, max = 255, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
    /// Date of birth, ISO 8601 (`YYYY-MM-DD`)
    #[schema(value_type = Option<String>, format = Date)]
    pub birthdate: Option<jiff::civil::Date>,
}

impl UpdateUserRequest {
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            age: self.age,
            gender: self.gender,
            email: self.email,
            username: self.username,
            password: self.password,
            birthdate: self.birthdate.map(|d| d.to_diesel()),
        }
    }
}

/// User representation returned by the API. The password is not exposed.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub email: String,
    pub username: String,
    /// Date of birth, ISO 8601 (`YYYY-MM-DD`)
    pub birthdate: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            gender: user.gender,
            email: user.email,
            username: user.username,
            birthdate: user.birthdate.to_jiff().to_string(),
        }
    }
}

/// Message envelope returned by user create/update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn created(user: &User) -> Self {
        Self {
            message: format!(
                "User {} with ID {} successfully created",
                user.username, user.id
            ),
        }
    }

    pub fn updated(user: &User) -> Self {
        Self {
            message: format!(
                "User {} with ID {} successfully updated",
                user.username, user.id
            ),
        }
    }
}
