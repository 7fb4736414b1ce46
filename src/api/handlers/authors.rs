//! Author endpoint handlers.

use crate::api::doc::AUTHOR_TAG;
use crate::api::dto::{AuthorResponse, CreateAuthorRequest};
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

/// Creates author routes.
///
/// # Routes
/// - `POST /` - Create a new author
/// - `GET /` - List all authors
/// - `GET /{id}` - Get author by id
/// - `DELETE /{id}` - Delete author by id
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_author).get(list_authors))
        .route("/{id}", get(get_author).delete(delete_author))
}

/// Creates an author. Responds 201 with the created record, 400 on an
/// invalid body, 409 when the name is already taken.
#[utoipa::path(
    post,
    path = "/api/v1/authors",
    tag = AUTHOR_TAG,
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Author name already exists")
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAuthorRequest>,
) -> AppResult<(StatusCode, Json<AuthorResponse>)> {
    let author = state.services.authors.create(request.into_new_author()).await?;
    Ok((StatusCode::CREATED, Json(AuthorResponse::from(author))))
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i64, Path, description = "Author id")
    ),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.services.authors.get(id).await?;
    Ok(Json(AuthorResponse::from(author)))
}

#[utoipa::path(
    get,
    path = "/api/v1/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "All authors", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Deletes an author. Responds 204 on success, 404 when no such row.
#[utoipa::path(
    delete,
    path = "/api/v1/authors/{id}",
    tag = AUTHOR_TAG,
    params(
        ("id" = i64, Path, description = "Author id")
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.services.authors.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "author".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
