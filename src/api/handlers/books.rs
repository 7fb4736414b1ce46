//! Book endpoint handlers.

use crate::api::doc::BOOK_TAG;
use crate::api::dto::{BookResponse, CreateBookRequest};
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

/// Creates book routes.
///
/// # Routes
/// - `POST /` - Create a new book
/// - `GET /` - List all books
/// - `GET /{id}` - Get book by id
/// - `DELETE /{id}` - Delete book by id
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_book).get(list_books))
        .route("/{id}", get(get_book).delete(delete_book))
}

/// Creates a book. Responds 201 with the created record; an invalid
/// body or a dangling author/publisher/user reference is a 400.
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = BOOK_TAG,
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid request body or unknown reference")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let book = state.services.books.create(request.into_new_book()).await?;
    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

#[utoipa::path(
    get,
    path = "/api/v1/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i64, Path, description = "Book id")
    ),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(BookResponse::from(book)))
}

#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = BOOK_TAG,
    responses(
        (status = 200, description = "All books", body = Vec<BookResponse>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Deletes a book. Responds 204 on success, 404 when no such row.
#[utoipa::path(
    delete,
    path = "/api/v1/books/{id}",
    tag = BOOK_TAG,
    params(
        ("id" = i64, Path, description = "Book id")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.services.books.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "book".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
