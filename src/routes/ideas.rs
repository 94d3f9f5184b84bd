use crate::database::models::idea_item::{FeedbackBuilder, IdeaBuilder, VoteDirection};
use crate::database::models::{generate_feedback_id, generate_idea_id, idea_item};
use crate::models::ids::IdeaId;
use crate::models::{ideas::Idea, Data};
use crate::routes::ApiError;
use crate::util::extract::{Extension, Json, Path};
use crate::util::validate::validation_errors_to_string;
use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString, PickFirst};
use sqlx::SqlitePool;
use validator::Validate;

pub fn config() -> Router {
    Router::new()
        .route("/submit-idea", post(idea_submit))
        .route("/getValidationIdeas", get(validation_ideas_get))
        .route("/getValidationIdeas/:id", get(validation_idea_get))
        .route("/upvoteIdea/:id", post(idea_upvote))
        .route("/downvoteIdea/:id", post(idea_downvote))
}

#[derive(Deserialize, Validate)]
pub struct IdeaSubmission {
    #[serde(rename = "formData")]
    #[validate]
    pub form_data: IdeaFormData,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// The submission form payload. Empty strings on optional fields are
/// what the browser sends for untouched inputs; they normalize to
/// absent.
#[serde_as]
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IdeaFormData {
    #[validate(length(min = 1, max = 256))]
    pub idea_title: String,
    #[validate(length(min = 1, max = 256))]
    pub dev_name: String,
    #[validate(length(min = 1, max = 2048), url)]
    pub idea_url: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub idea_description: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub idea_tag: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub idea_comp: Option<String>,
    #[serde(default)]
    pub is_open_source: bool,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub problem_solved: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub launch_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub tech_stack: Option<String>,
    // Number inputs reach us as either a number or a numeric string
    #[serde_as(as = "PickFirst<(_, NoneAsEmptyString)>")]
    #[serde(default)]
    pub team_size: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(url)]
    pub repo_link: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub selected_technologies: Vec<String>,
}

pub async fn idea_submit(
    Extension(pool): Extension<SqlitePool>,
    Json(submission): Json<IdeaSubmission>,
) -> Result<Json<Data<Idea>>, ApiError> {
    submission
        .validate()
        .map_err(|err| ApiError::Validation(validation_errors_to_string(err, None)))?;

    let form = submission.form_data;

    let mut transaction = pool.begin().await?;

    let idea_id = generate_idea_id(&mut transaction).await?;

    IdeaBuilder {
        idea_id,
        user_id: submission.user_id,
        title: form.idea_title,
        url: form.idea_url,
        dev_name: form.dev_name,
        description: form.idea_description,
        tag: form.idea_tag,
        competitors: form.idea_comp,
        open_source: form.is_open_source,
        target_audience: form.target_audience,
        problem_solved: form.problem_solved,
        launch_date: form.launch_date,
        tech_stack: form.tech_stack,
        team_size: form.team_size,
        repo_link: form.repo_link,
        budget: form.budget,
        technologies: form.selected_technologies,
    }
    .insert(&mut transaction)
    .await?;

    transaction.commit().await?;

    let idea = idea_item::Idea::get(idea_id, &pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Data {
        data: Idea::from(idea),
    }))
}

pub async fn validation_ideas_get(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<Data<Vec<Idea>>>, ApiError> {
    let ideas = idea_item::Idea::get_all(&pool).await?;

    Ok(Json(Data {
        data: ideas.into_iter().map(Idea::from).collect(),
    }))
}

pub async fn validation_idea_get(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<IdeaId>,
) -> Result<Json<Data<Vec<Idea>>>, ApiError> {
    let idea = idea_item::Idea::get(id.into(), &pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    // The validation page renders a list, so a single lookup is served
    // as a one-element array
    Ok(Json(Data {
        data: vec![Idea::from(idea)],
    }))
}

/// A vote request. Clients also send `ideaID` and an `upvoteCount`/
/// `downvoteCount` of 1; the path id and method are authoritative and
/// the extra keys are ignored.
#[derive(Deserialize, Validate)]
pub struct VoteSubmission {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[validate(length(max = 2048))]
    pub feedback: Option<String>,
}

pub async fn idea_upvote(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<IdeaId>,
    Json(vote): Json<VoteSubmission>,
) -> Result<Json<Data<Idea>>, ApiError> {
    idea_vote(pool, id, vote, VoteDirection::Up).await
}

pub async fn idea_downvote(
    Extension(pool): Extension<SqlitePool>,
    Path(id): Path<IdeaId>,
    Json(vote): Json<VoteSubmission>,
) -> Result<Json<Data<Idea>>, ApiError> {
    idea_vote(pool, id, vote, VoteDirection::Down).await
}

async fn idea_vote(
    pool: SqlitePool,
    id: IdeaId,
    vote: VoteSubmission,
    direction: VoteDirection,
) -> Result<Json<Data<Idea>>, ApiError> {
    vote.validate()
        .map_err(|err| ApiError::Validation(validation_errors_to_string(err, None)))?;

    let mut transaction = pool.begin().await?;

    let updated = idea_item::Idea::apply_vote(id.into(), direction, &mut transaction).await?;
    if !updated {
        return Err(ApiError::InvalidInput(
            "The specified idea does not exist!".to_string(),
        ));
    }

    // A non-empty comment is kept alongside the vote
    if let Some(feedback) = vote.feedback.filter(|x| !x.is_empty()) {
        let feedback_id = generate_feedback_id(&mut transaction).await?;

        FeedbackBuilder {
            feedback_id,
            idea_id: id.into(),
            user_id: vote.user_id,
            body: feedback,
            direction,
        }
        .insert(&mut transaction)
        .await?;
    }

    transaction.commit().await?;

    let idea = idea_item::Idea::get(id.into(), &pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Data {
        data: Idea::from(idea),
    }))
}
