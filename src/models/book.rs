//! Book models for database operations.
//!
//! Books reference an author, a publisher, and the user who registered
//! them; the referential integrity lives in the database.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Book query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub isbn: String,
    pub pages: i32,
    pub chapters: i32,
    pub author_id: i64,
    pub publisher_id: i64,
    pub user_id: i64,
}

/// NewBook insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::books)]
pub struct NewBook {
    pub name: String,
    pub isbn: String,
    pub pages: i32,
    pub chapters: i32,
    pub author_id: i64,
    pub publisher_id: i64,
    pub user_id: i64,
}
