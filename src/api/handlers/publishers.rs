//! Publisher endpoint handlers.

use crate::api::doc::PUBLISHER_TAG;
use crate::api::dto::{CreatePublisherRequest, PublisherResponse};
use crate::api::extract::ValidatedJson;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    routing::post,
};

/// Creates publisher routes.
///
/// # Routes
/// - `POST /` - Create a new publisher
/// - `GET /` - List all publishers
/// - `GET /{id}` - Get publisher by id
/// - `DELETE /{id}` - Delete publisher by id
pub fn publisher_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_publisher).get(list_publishers))
        .route("/{id}", get(get_publisher).delete(delete_publisher))
}

/// Creates a publisher. Responds 201 with the created record, 400 on an
/// invalid body, 409 when the name or code is already taken.
#[utoipa::path(
    post,
    path = "/api/v1/publishers",
    tag = PUBLISHER_TAG,
    request_body = CreatePublisherRequest,
    responses(
        (status = 201, description = "Publisher created", body = PublisherResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Publisher name or code already exists")
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePublisherRequest>,
) -> AppResult<(StatusCode, Json<PublisherResponse>)> {
    let publisher = state
        .services
        .publishers
        .create(request.into_new_publisher())
        .await?;
    Ok((StatusCode::CREATED, Json(PublisherResponse::from(publisher))))
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i64, Path, description = "Publisher id")
    ),
    responses(
        (status = 200, description = "Publisher found", body = PublisherResponse),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PublisherResponse>> {
    let publisher = state.services.publishers.get(id).await?;
    Ok(Json(PublisherResponse::from(publisher)))
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    tag = PUBLISHER_TAG,
    responses(
        (status = 200, description = "All publishers", body = Vec<PublisherResponse>)
    )
)]
pub async fn list_publishers(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PublisherResponse>>> {
    let publishers = state.services.publishers.list().await?;
    Ok(Json(
        publishers.into_iter().map(PublisherResponse::from).collect(),
    ))
}

/// Deletes a publisher. Responds 204 on success, 404 when no such row.
#[utoipa::path(
    delete,
    path = "/api/v1/publishers/{id}",
    tag = PUBLISHER_TAG,
    params(
        ("id" = i64, Path, description = "Publisher id")
    ),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.services.publishers.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "publisher".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
