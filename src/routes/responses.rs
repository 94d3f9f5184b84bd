use crate::database::models::{generate_response_id, response_item};
use crate::models::responses::{Analysis, ResponseRecord};
use crate::models::Data;
use crate::routes::ApiError;
use crate::util::extract::{Extension, Json, Query};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use sqlx::SqlitePool;

pub fn config() -> Router {
    Router::new()
        .route("/submit-response", post(response_submit))
        .route("/all-ideas", get(responses_get_all))
        .route("/ideas", get(responses_get_user))
}

#[derive(Deserialize)]
pub struct ResponseSubmission {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "devName")]
    pub dev_name: Option<String>,
    /// Either a structured analysis document or a string containing
    /// serialized JSON; both normalize to the structured form.
    pub response: serde_json::Value,
}

pub async fn response_submit(
    Extension(pool): Extension<SqlitePool>,
    Json(submission): Json<ResponseSubmission>,
) -> Result<Json<Data<ResponseRecord>>, ApiError> {
    let analysis = Analysis::from_submission(submission.response)
        .map_err(|err| ApiError::InvalidInput(format!("Invalid analysis document: {err}")))?;

    let mut transaction = pool.begin().await?;

    let response_id = generate_response_id(&mut transaction).await?;

    response_item::ResponseBuilder {
        response_id,
        user_id: submission.user_id,
        dev_name: submission.dev_name,
        analysis,
    }
    .insert(&mut transaction)
    .await?;

    transaction.commit().await?;

    let response = response_item::Response::get(response_id, &pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Data {
        data: ResponseRecord::from(response),
    }))
}

#[derive(Deserialize)]
pub struct AllIdeasQuery {
    #[serde(rename = "techStack")]
    pub tech_stack: Option<String>,
}

pub async fn responses_get_all(
    Extension(pool): Extension<SqlitePool>,
    Query(query): Query<AllIdeasQuery>,
) -> Result<Json<Data<Vec<ResponseRecord>>>, ApiError> {
    let responses = response_item::Response::get_all(&pool).await?;

    let mut records: Vec<ResponseRecord> =
        responses.into_iter().map(ResponseRecord::from).collect();

    // Filtering happens over the full fetched set, matching what the
    // browser client used to do locally
    if let Some(tech) = query.tech_stack {
        records.retain(|record| record.analysis.uses_tech(&tech));
    }

    Ok(Json(Data { data: records }))
}

#[derive(Deserialize)]
pub struct UserIdeasQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

pub async fn responses_get_user(
    Extension(pool): Extension<SqlitePool>,
    Query(query): Query<UserIdeasQuery>,
) -> Result<Json<Data<Vec<ResponseRecord>>>, ApiError> {
    let responses = response_item::Response::get_many_user(&query.user_id, &pool).await?;

    Ok(Json(Data {
        data: responses.into_iter().map(ResponseRecord::from).collect(),
    }))
}
