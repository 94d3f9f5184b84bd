use crate::util::extract::Json;
use axum::http::StatusCode;
use serde_json::{json, Value};

pub async fn index_get() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "name": "ideahunt",
            "version": env!("CARGO_PKG_VERSION"),
            "about": "Hello to the Responses API"
        })),
    )
}
