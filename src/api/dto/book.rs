//! Book API request/response types.

use crate::models::{Book, NewBook};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a book. `pages` and `chapters` default to 0
/// when omitted.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "isbn must be between 1 and 100 characters"))]
    pub isbn: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "pages must not be negative"))]
    pub pages: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "chapters must not be negative"))]
    pub chapters: i32,
    pub author_id: i64,
    pub publisher_id: i64,
    pub user_id: i64,
}

impl CreateBookRequest {
    pub fn into_new_book(self) -> NewBook {
        NewBook {
            name: self.name,
            isbn: self.isbn,
            pages: self.pages,
            chapters: self.chapters,
            author_id: self.author_id,
            publisher_id: self.publisher_id,
            user_id: self.user_id,
        }
    }
}

/// Book representation returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub name: String,
    pub isbn: String,
    pub pages: i32,
    pub chapters: i32,
    pub author_id: i64,
    pub publisher_id: i64,
    pub user_id: i64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            isbn: book.isbn,
            pages: book.pages,
            chapters: book.chapters,
            author_id: book.author_id,
            publisher_id: book.publisher_id,
            user_id: book.user_id,
        }
    }
}
