//! Publisher API request/response types.

use crate::models::{NewPublisher, Publisher};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating a publisher.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublisherRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "code must be between 1 and 100 characters"))]
    pub code: String,
}

impl CreatePublisherRequest {
    pub fn into_new_publisher(self) -> NewPublisher {
        NewPublisher {
            name: self.name,
            code: self.code,
        }
    }
}

/// Publisher representation returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublisherResponse {
    pub id: i64,
    pub name: String,
    pub code: String,
}

impl From<Publisher> for PublisherResponse {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name,
            code: publisher.code,
        }
    }
}
