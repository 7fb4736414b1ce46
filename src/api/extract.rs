//! Validating JSON extractor.
//!
//! `ValidatedJson<T>` deserializes the body and runs the `validator`
//! rules declared on `T` before the handler sees it. Undeserializable
//! bodies (malformed JSON, missing or null required fields) become
//! `BadRequest`; rule violations become `ValidationErrors`. Both render
//! as 400.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::CreateAuthorRequest;
    use axum::body::Body;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/api/v1/authors")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_accepted() {
        let request = json_request(r#"{"name": "Rodrigo Peleias", "age": 32}"#);
        let ValidatedJson(parsed) =
            ValidatedJson::<CreateAuthorRequest>::from_request(request, &())
                .await
                .unwrap();
        assert_eq!(parsed.name, "Rodrigo Peleias");
        assert_eq!(parsed.age, 32);
    }

    #[tokio::test]
    async fn test_null_required_field_is_bad_request() {
        let request = json_request(r#"{"name": null, "age": 32}"#);
        let result = ValidatedJson::<CreateAuthorRequest>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let request = json_request(r#"{"age": 32}"#);
        let result = ValidatedJson::<CreateAuthorRequest>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = json_request("{not json");
        let result = ValidatedJson::<CreateAuthorRequest>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_errors() {
        let request = json_request(r#"{"name": "", "age": 32}"#);
        let result = ValidatedJson::<CreateAuthorRequest>::from_request(request, &()).await;
        match result {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
            }
            other => panic!("expected ValidationErrors, got {other:?}"),
        }
    }
}
