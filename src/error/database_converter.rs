use crate::error::{AppError, ConstraintParser};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Converts diesel errors into structured [`AppError`] variants.
///
/// Constraint violations carry the entity/field/value that tripped them,
/// extracted from the PostgreSQL error message and constraint name. The
/// schema names constraints `<table>_<column>_key` / `<table>_<column>_fkey`,
/// which is what the parser expects.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a diesel error, tagging unparseable ones with `operation`.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            DieselError::DatabaseError(kind, info) => {
                let constraint = info.constraint_name().map(str::to_string);
                let table = info.table_name().map(str::to_string);
                // The DETAIL line holds the "Key (col)=(value)" part
                let message = match info.details() {
                    Some(details) => format!("{}\n{}", info.message(), details),
                    None => info.message().to_string(),
                };

                match kind {
                    DatabaseErrorKind::UniqueViolation => Self::convert_unique_violation(
                        &message,
                        constraint.as_deref(),
                        table.as_deref(),
                    ),
                    DatabaseErrorKind::ForeignKeyViolation => {
                        Self::convert_foreign_key_violation(&message, constraint.as_deref())
                    }
                    DatabaseErrorKind::NotNullViolation => {
                        Self::convert_not_null_violation(&message, constraint.as_deref())
                    }
                    DatabaseErrorKind::CheckViolation => {
                        Self::convert_check_violation(&message, constraint.as_deref())
                    }
                    _ => AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::anyhow!(message),
                    },
                }
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::new(other),
            },
        }
    }

    fn convert_unique_violation(
        message: &str,
        constraint: Option<&str>,
        table: Option<&str>,
    ) -> AppError {
        if let Some((entity, field, value)) =
            ConstraintParser::parse_unique_violation(message, constraint)
        {
            return AppError::Duplicate {
                entity,
                field,
                value,
            };
        }

        AppError::Duplicate {
            entity: table.unwrap_or("resource").to_string(),
            field: "unknown".to_string(),
            value: "duplicate_value".to_string(),
        }
    }

    fn convert_foreign_key_violation(message: &str, constraint: Option<&str>) -> AppError {
        if let Some((_, field, value)) =
            ConstraintParser::parse_foreign_key_violation(message, constraint)
        {
            return AppError::Validation {
                field,
                reason: format!("referenced row '{value}' does not exist"),
            };
        }

        AppError::Validation {
            field: "unknown".to_string(),
            reason: "foreign key constraint violated".to_string(),
        }
    }

    fn convert_not_null_violation(message: &str, constraint: Option<&str>) -> AppError {
        if let Some((_, field)) = ConstraintParser::parse_not_null_violation(message, constraint) {
            return AppError::Validation {
                field,
                reason: "must not be null".to_string(),
            };
        }

        AppError::Validation {
            field: "unknown".to_string(),
            reason: "not-null constraint violated".to_string(),
        }
    }

    fn convert_check_violation(message: &str, constraint: Option<&str>) -> AppError {
        if let Some((_, field)) = ConstraintParser::parse_check_violation(message, constraint) {
            return AppError::Validation {
                field,
                reason: "check constraint violated".to_string(),
            };
        }

        AppError::Validation {
            field: "unknown".to_string(),
            reason: "check constraint violated".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockDatabaseErrorInfo {
        message: String,
        details: Option<String>,
        table_name: Option<String>,
        constraint_name: Option<String>,
    }

    impl diesel::result::DatabaseErrorInformation for MockDatabaseErrorInfo {
        fn message(&self) -> &str {
            &self.message
        }

        fn details(&self) -> Option<&str> {
            self.details.as_deref()
        }

        fn hint(&self) -> Option<&str> {
            None
        }

        fn table_name(&self) -> Option<&str> {
            self.table_name.as_deref()
        }

        fn column_name(&self) -> Option<&str> {
            None
        }

        fn constraint_name(&self) -> Option<&str> {
            self.constraint_name.as_deref()
        }

        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, info: MockDatabaseErrorInfo) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(info))
    }

    #[test]
    fn test_unique_violation_maps_to_duplicate() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            MockDatabaseErrorInfo {
                message: "duplicate key value violates unique constraint \"publishers_code_key\""
                    .to_string(),
                details: Some("Key (code)=(PKT) already exists.".to_string()),
                table_name: Some("publishers".to_string()),
                constraint_name: Some("publishers_code_key".to_string()),
            },
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "create publisher") {
            AppError::Duplicate {
                entity,
                field,
                value,
            } => {
                assert_eq!(entity, "publishers");
                assert_eq!(field, "code");
                assert_eq!(value, "PKT");
            }
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_unique_violation_without_constraint_falls_back_to_table() {
        let error = database_error(
            DatabaseErrorKind::UniqueViolation,
            MockDatabaseErrorInfo {
                message: "duplicate key value violates unique constraint".to_string(),
                details: None,
                table_name: Some("authors".to_string()),
                constraint_name: None,
            },
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "create author") {
            AppError::Duplicate { entity, field, .. } => {
                assert_eq!(entity, "authors");
                assert_eq!(field, "unknown");
            }
            other => panic!("expected Duplicate, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_key_violation_maps_to_validation() {
        let error = database_error(
            DatabaseErrorKind::ForeignKeyViolation,
            MockDatabaseErrorInfo {
                message:
                    "insert or update on table \"books\" violates foreign key constraint \"books_author_id_fkey\""
                        .to_string(),
                details: Some("Key (author_id)=(999) is not present in table \"authors\".".to_string()),
                table_name: Some("books".to_string()),
                constraint_name: Some("books_author_id_fkey".to_string()),
            },
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "create book") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "author_id");
                assert!(reason.contains("999"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_not_null_violation_maps_to_validation() {
        let error = database_error(
            DatabaseErrorKind::NotNullViolation,
            MockDatabaseErrorInfo {
                message: "null value in column \"isbn\" of relation \"books\" violates not-null constraint"
                    .to_string(),
                details: None,
                table_name: Some("books".to_string()),
                constraint_name: None,
            },
        );

        match DatabaseErrorConverter::convert_diesel_error(error, "create book") {
            AppError::Validation { field, reason } => {
                assert_eq!(field, "isbn");
                assert_eq!(reason, "must not be null");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_maps_to_not_found() {
        let result = DatabaseErrorConverter::convert_diesel_error(DieselError::NotFound, "find");
        assert!(matches!(result, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_database_error_keeps_operation() {
        let error = DieselError::BrokenTransactionManager;
        match DatabaseErrorConverter::convert_diesel_error(error, "update user") {
            AppError::Database { operation, .. } => assert_eq!(operation, "update user"),
            other => panic!("expected Database, got {other:?}"),
        }
    }
}
