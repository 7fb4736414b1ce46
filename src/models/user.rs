//! User models for database operations.
//!
//! `Gender` is stored as text; the wire representation matches the
//! uppercase JSON form (`"MALE"` / `"FEMALE"`).

use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// User gender
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl diesel::query_builder::QueryId for Gender {
    type QueryId = Gender;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl ToSql<Text, Pg> for Gender {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        };
        out.write_all(s.as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for Gender {
    fn from_sql(bytes: <Pg as diesel::backend::Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unrecognized gender: {}", s).into()),
        }
    }
}

/// User query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub email: String,
    pub username: String,
    pub password: String,
    pub birthdate: jiff_diesel::Date,
}

/// NewUser insert model for INSERT operations
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub email: String,
    pub username: String,
    pub password: String,
    pub birthdate: jiff_diesel::Date,
}

/// UpdateUser model for UPDATE operations
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub birthdate: Option<jiff_diesel::Date>,
}

impl UpdateUser {
    /// True when no field is set. Diesel rejects a changeset with zero
    /// columns, so an empty update must never reach the query builder.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.email.is_none()
            && self.username.is_none()
            && self.password.is_none()
            && self.birthdate.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serialization() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
        assert_eq!(
            serde_json::to_string(&Gender::Female).unwrap(),
            "\"FEMALE\""
        );
    }

    #[test]
    fn test_gender_deserialization() {
        let gender: Gender = serde_json::from_str("\"MALE\"").unwrap();
        assert_eq!(gender, Gender::Male);
        assert!(serde_json::from_str::<Gender>("\"male\"").is_err());
    }

    #[test]
    fn test_update_user_emptiness() {
        assert!(UpdateUser::default().is_empty());

        let changes = UpdateUser {
            age: Some(33),
            ..UpdateUser::default()
        };
        assert!(!changes.is_empty());
    }
}
