//! Error response body returned by every failing endpoint.

use serde::Serialize;
use utoipa::ToSchema;

/// Structured error payload.
///
/// `code` is a stable machine-readable identifier; `message` is for
/// humans. `details` carries field-level information for validation
/// failures.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("{entity} with {field}={value} was not found"),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            format!("{entity} with {field} '{value}' already exists"),
        )
        .with_details(serde_json::json!({
            "entity": entity,
            "field": field,
            "value": value,
        }))
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new(
            "VALIDATION_ERROR",
            format!("Validation failed for {field}: {reason}"),
        )
        .with_details(serde_json::json!({
            "field": field,
            "reason": reason,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let response = ErrorResponse::new("NOT_FOUND", "Resource not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json.get("details").is_none());
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn test_details_and_request_id_roundtrip() {
        let response = ErrorResponse::new("VALIDATION_ERROR", "Validation failed")
            .with_details(serde_json::json!({"field": "email"}))
            .with_request_id("req-123");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["details"]["field"], "email");
        assert_eq!(json["request_id"], "req-123");
    }
}
