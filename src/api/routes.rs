//! Router assembly.
//!
//! Resource routes nest under `/api/v1`; health probes and the OpenAPI
//! document sit at the root. The request-id layer is outermost so the
//! logging layer can pick the id up from extensions.

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/authors", handlers::authors::author_routes())
        .nest("/publishers", handlers::publishers::publisher_routes())
        .nest("/users", handlers::users::user_routes())
        .nest("/books", handlers::books::book_routes());

    Router::new()
        .merge(handlers::health::health_routes())
        .nest("/api/v1", api_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel_async::AsyncPgConnection;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;

    #[tokio::test]
    async fn test_router_builds() {
        // build_unchecked hands out a pool without opening connections
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
            "postgres://localhost/bookstore_test",
        );
        let pool = bb8::Pool::builder().build_unchecked(manager);
        let state = AppState::new(pool);
        let _router = create_router(state);
    }
}
