use crate::util::extract::Json;
use axum::extract::rejection::{ExtensionRejection, JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

mod ideas;
mod index;
mod not_found;
mod responses;

pub use self::index::index_get;
pub use self::not_found::not_found;

pub fn root_config() -> Router {
    Router::new().route("/", get(index_get))
}

/// Everything nested under `/response/api`.
pub fn responses_config() -> Router {
    Router::new()
        .merge(ideas::config())
        .merge(responses::config())
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Database Error: {0}")]
    Database(#[from] crate::database::models::DatabaseError),
    #[error("Database Error: {0}")]
    SqlxDatabase(#[from] sqlx::Error),
    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Error while validating input: {0}")]
    Validation(String),
    #[error("Resource not found")]
    NotFound,
}

impl ApiError {
    pub fn as_api_error(&self) -> crate::models::error::ApiError<'_> {
        crate::models::error::ApiError {
            error: match self {
                ApiError::Database(..) => "database_error",
                ApiError::SqlxDatabase(..) => "database_error",
                ApiError::Json(..) => "json_error",
                ApiError::InvalidInput(..) => "invalid_input",
                ApiError::Validation(..) => "invalid_input",
                ApiError::NotFound => "not_found",
            },
            description: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::SqlxDatabase(..) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Json(..) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            ApiError::Validation(..) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };

        (status_code, Json(self.as_api_error())).into_response()
    }
}

// Extractor rejections funnel into the same error body as every other
// bad request.
impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}

impl From<ExtensionRejection> for ApiError {
    fn from(err: ExtensionRejection) -> Self {
        ApiError::Validation(err.body_text())
    }
}
