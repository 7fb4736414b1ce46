//! Error handler for converting AppError to HTTP responses.
//!
//! Implements `IntoResponse` for `AppError` so handlers can return
//! `AppResult<T>` directly. Internal error sources are never leaked to
//! clients; they are logged here and replaced with sanitized messages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Status code mapping:
    /// - NotFound → 404
    /// - Duplicate → 409
    /// - Validation / ValidationErrors / BadRequest → 400
    /// - ConnectionPool → 503
    /// - Database / Configuration / Internal → 500
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found_error(entity, field, value),
            ),
            AppError::Duplicate {
                entity,
                field,
                value,
            } => (
                StatusCode::CONFLICT,
                ErrorResponse::duplicate_error(entity, field, value),
            ),
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_error(field, reason),
            ),
            AppError::ValidationErrors { errors } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed").with_details(
                    json!({
                        "errors": errors,
                    }),
                ),
            ),
            AppError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message),
            ),
            AppError::Database { operation, source } => {
                error!(operation = %operation, error = %source, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "DATABASE_ERROR",
                        format!("Database operation failed: {operation}"),
                    )
                    .with_details(json!({
                        "operation": operation,
                    })),
                )
            }
            AppError::Configuration { key, source } => {
                error!(key = %key, error = %source, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("CONFIGURATION_ERROR", format!("Configuration error: {key}"))
                        .with_details(json!({
                            "key": key,
                        })),
                )
            }
            AppError::ConnectionPool { source } => {
                error!(error = %source, "Connection pool error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
                )
            }
            AppError::Internal { source } => {
                error!(error = %source, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        let mut response = (status, Json(error_response.clone())).into_response();
        // The request-id layer re-renders the body with the id filled in.
        response.extensions_mut().insert(error_response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let status = status_of(AppError::NotFound {
            entity: "author".to_string(),
            field: "id".to_string(),
            value: "99".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let status = status_of(AppError::Duplicate {
            entity: "users".to_string(),
            field: "email".to_string(),
            value: "rodrigo@bookstore.io".to_string(),
        });
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let status = status_of(AppError::Validation {
            field: "author_id".to_string(),
            reason: "referenced row '999' does not exist".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let status = status_of(AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "email".to_string(),
                message: "must be a valid email address".to_string(),
            }],
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let status = status_of(AppError::BadRequest {
            message: "missing field `name`".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_connection_pool_maps_to_503() {
        let status = status_of(AppError::ConnectionPool {
            source: anyhow::anyhow!("pool timed out"),
        });
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let status = status_of(AppError::Internal {
            source: anyhow::anyhow!("boom"),
        });
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_is_kept_in_extensions() {
        let response = AppError::BadRequest {
            message: "missing field `name`".to_string(),
        }
        .into_response();
        let body = response.extensions().get::<ErrorResponse>();
        assert_eq!(body.map(|b| b.code.as_str()), Some("BAD_REQUEST"));
    }
}
