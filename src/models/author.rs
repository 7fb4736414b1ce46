//! Author models for database operations.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Author query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

/// NewAuthor insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::authors)]
pub struct NewAuthor {
    pub name: String,
    pub age: i32,
}
