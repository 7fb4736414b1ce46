//! User endpoint handlers.
//!
//! Create and update answer with a message envelope rather than the
//! record itself; reads use `UserResponse`, which omits the password.

use crate::api::doc::USER_TAG;
use crate::api::dto::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
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

/// Creates user routes.
///
/// # Routes
/// - `POST /` - Create a new user
/// - `GET /` - List all users
/// - `GET /{id}` - Get user by id
/// - `PUT /{id}` - Update user by id
/// - `DELETE /{id}` - Delete user by id
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

/// Creates a user. Responds 201 with a confirmation message, 400 on an
/// invalid body, 409 when the email or username is already taken.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Invalid request body"),
        (status = 409, description = "Email or username already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let user = state.services.users.create(request.into_new_user()).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::created(&user))))
}

/// Updates a user. Responds 200 with a confirmation message, 400 when
/// the body is invalid or empty, 404 when the id does not exist, 409
/// when a changed email/username collides.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Invalid or empty request body"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email or username already exists")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    let user = state
        .services
        .users
        .update(id, request.into_update_user())
        .await?;
    Ok(Json(MessageResponse::updated(&user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Deletes a user. Responds 204 on success, 404 when no such row.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.services.users.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }
}
