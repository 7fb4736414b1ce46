//! Request ID middleware for request correlation.
//!
//! Every request gets an identifier: the incoming `x-request-id` header
//! when present, a fresh UUID v4 otherwise. The id is stored in request
//! extensions, echoed on the response, and stamped into error bodies.

use crate::api::dto::ErrorResponse;
use axum::{
    Json,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions for downstream access.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let response = next.run(request).await;
    let mut response = stamp_error_body(response, &request_id);

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

/// Re-renders an error body with the request id filled in. The error
/// renderer leaves its `ErrorResponse` in the response extensions;
/// responses without one pass through untouched.
fn stamp_error_body(mut response: Response, request_id: &str) -> Response {
    match response.extensions_mut().remove::<ErrorResponse>() {
        Some(body) => {
            let status = response.status();
            (status, Json(body.with_request_id(request_id))).into_response()
        }
        None => response,
    }
}
