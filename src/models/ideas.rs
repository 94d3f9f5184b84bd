use super::ids::IdeaId;
use crate::database::models::idea_item;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A community-submitted idea, open for validation voting.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// The ID of the idea, encoded as base62 for usage in the API
    #[serde(rename = "projectID")]
    pub project_id: IdeaId,
    /// The opaque identifier of the submitting user, if they were signed in
    pub user_id: Option<String>,
    pub idea_title: String,
    pub idea_url: String,
    pub dev_name: String,
    pub idea_description: Option<String>,
    pub idea_tag: Option<String>,
    pub idea_comp: Option<String>,
    pub is_open_source: bool,
    pub target_audience: Option<String>,
    pub problem_solved: Option<String>,
    pub launch_date: Option<NaiveDate>,
    pub tech_stack: Option<String>,
    pub team_size: Option<i64>,
    pub repo_link: Option<String>,
    pub budget: Option<String>,
    pub selected_technologies: Vec<String>,
    /// Total upvotes the idea has received. Only ever mutated by the
    /// vote endpoints, by exactly one per call.
    pub upvotes: i64,
    pub downvotes: i64,
    /// The time at which the idea was submitted. Immutable.
    pub created_at: DateTime<Utc>,
}

impl From<idea_item::Idea> for Idea {
    fn from(data: idea_item::Idea) -> Self {
        Idea {
            project_id: data.id.into(),
            user_id: data.user_id,
            idea_title: data.title,
            idea_url: data.url,
            dev_name: data.dev_name,
            idea_description: data.description,
            idea_tag: data.tag,
            idea_comp: data.competitors,
            is_open_source: data.open_source,
            target_audience: data.target_audience,
            problem_solved: data.problem_solved,
            launch_date: data.launch_date,
            tech_stack: data.tech_stack,
            team_size: data.team_size,
            repo_link: data.repo_link,
            budget: data.budget,
            selected_technologies: data.technologies.0,
            upvotes: data.upvotes,
            downvotes: data.downvotes,
            created_at: data.created,
        }
    }
}
