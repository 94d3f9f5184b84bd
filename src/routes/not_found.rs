use crate::models::error::ApiError;
use crate::util::extract::Json;
use axum::http::StatusCode;

pub async fn not_found() -> (StatusCode, Json<ApiError<'static>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            error: "not_found",
            description: "the requested route does not exist".to_string(),
        }),
    )
}
