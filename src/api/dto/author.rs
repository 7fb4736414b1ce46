//! Author API request/response types.

use crate::models::{Author, NewAuthor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating an author.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAuthorRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "age must not be negative"))]
    pub age: i32,
}

impl CreateAuthorRequest {
    pub fn into_new_author(self) -> NewAuthor {
        NewAuthor {
            name: self.name,
            age: self.age,
        }
    }
}

/// Author representation returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            age: author.age,
        }
    }
}
