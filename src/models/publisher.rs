//! Publisher models for database operations.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Publisher query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::publishers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub code: String,
}

/// NewPublisher insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::publishers)]
pub struct NewPublisher {
    pub name: String,
    pub code: String,
}
