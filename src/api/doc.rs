//! OpenAPI documentation, served as JSON at `/api-docs/openapi.json`.

use utoipa::OpenApi;

pub const AUTHOR_TAG: &str = "authors";
pub const PUBLISHER_TAG: &str = "publishers";
pub const USER_TAG: &str = "users";
pub const BOOK_TAG: &str = "books";
pub const HEALTH_TAG: &str = "health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore Manager API",
        description = "CRUD backend for a bookstore catalog: authors, publishers, users and books",
    ),
    paths(
        crate::api::handlers::authors::create_author,
        crate::api::handlers::authors::get_author,
        crate::api::handlers::authors::list_authors,
        crate::api::handlers::authors::delete_author,
        crate::api::handlers::publishers::create_publisher,
        crate::api::handlers::publishers::get_publisher,
        crate::api::handlers::publishers::list_publishers,
        crate::api::handlers::publishers::delete_publisher,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::delete_user,
        crate::api::handlers::books::create_book,
        crate::api::handlers::books::get_book,
        crate::api::handlers::books::list_books,
        crate::api::handlers::books::delete_book,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(schemas(
        crate::api::dto::CreateAuthorRequest,
        crate::api::dto::AuthorResponse,
        crate::api::dto::CreatePublisherRequest,
        crate::api::dto::PublisherResponse,
        crate::api::dto::CreateUserRequest,
        crate::api::dto::UpdateUserRequest,
        crate::api::dto::UserResponse,
        crate::api::dto::MessageResponse,
        crate::api::dto::CreateBookRequest,
        crate::api::dto::BookResponse,
        crate::api::dto::ErrorResponse,
        crate::models::Gender,
        crate::api::handlers::health::HealthResponse,
    )),
    tags(
        (name = AUTHOR_TAG, description = "Author management"),
        (name = PUBLISHER_TAG, description = "Publisher management"),
        (name = USER_TAG, description = "User management"),
        (name = BOOK_TAG, description = "Book management"),
        (name = HEALTH_TAG, description = "Health and readiness probes"),
    )
)]
pub struct ApiDoc;
