use super::ids::{FeedbackId, IdeaId};
use super::DatabaseError;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;

pub struct IdeaBuilder {
    pub idea_id: IdeaId,
    pub user_id: Option<String>,
    pub title: String,
    pub url: String,
    pub dev_name: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub competitors: Option<String>,
    pub open_source: bool,
    pub target_audience: Option<String>,
    pub problem_solved: Option<String>,
    pub launch_date: Option<NaiveDate>,
    pub tech_stack: Option<String>,
    pub team_size: Option<i64>,
    pub repo_link: Option<String>,
    pub budget: Option<String>,
    pub technologies: Vec<String>,
}

impl IdeaBuilder {
    pub async fn insert(
        self,
        transaction: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> Result<IdeaId, DatabaseError> {
        let idea_struct = Idea {
            id: self.idea_id,
            user_id: self.user_id,
            title: self.title,
            url: self.url,
            dev_name: self.dev_name,
            description: self.description,
            tag: self.tag,
            competitors: self.competitors,
            open_source: self.open_source,
            target_audience: self.target_audience,
            problem_solved: self.problem_solved,
            launch_date: self.launch_date,
            tech_stack: self.tech_stack,
            team_size: self.team_size,
            repo_link: self.repo_link,
            budget: self.budget,
            technologies: Json(self.technologies),
            upvotes: 0,
            downvotes: 0,
            created: Utc::now(),
        };
        idea_struct.insert(&mut *transaction).await?;

        Ok(self.idea_id)
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Idea {
    pub id: IdeaId,
    pub user_id: Option<String>,
    pub title: String,
    pub url: String,
    pub dev_name: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub competitors: Option<String>,
    pub open_source: bool,
    pub target_audience: Option<String>,
    pub problem_solved: Option<String>,
    pub launch_date: Option<NaiveDate>,
    pub tech_stack: Option<String>,
    pub team_size: Option<i64>,
    pub repo_link: Option<String>,
    pub budget: Option<String>,
    pub technologies: Json<Vec<String>>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created: DateTime<Utc>,
}

/// Which vote counter an increment applies to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteDirection::Up => "up",
            VoteDirection::Down => "down",
        }
    }
}

impl Idea {
    pub async fn insert(
        &self,
        transaction: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            "
            INSERT INTO ideas (
                id, user_id, title, url, dev_name,
                description, tag, competitors, open_source,
                target_audience, problem_solved, launch_date,
                tech_stack, team_size, repo_link, budget,
                technologies, upvotes, downvotes, created
            )
            VALUES (
                ?, ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?
            )
            ",
        )
        .bind(self.id)
        .bind(self.user_id.as_ref())
        .bind(&self.title)
        .bind(&self.url)
        .bind(&self.dev_name)
        .bind(self.description.as_ref())
        .bind(self.tag.as_ref())
        .bind(self.competitors.as_ref())
        .bind(self.open_source)
        .bind(self.target_audience.as_ref())
        .bind(self.problem_solved.as_ref())
        .bind(self.launch_date)
        .bind(self.tech_stack.as_ref())
        .bind(self.team_size)
        .bind(self.repo_link.as_ref())
        .bind(self.budget.as_ref())
        .bind(&self.technologies)
        .bind(self.upvotes)
        .bind(self.downvotes)
        .bind(self.created)
        .execute(&mut **transaction)
        .await?;

        Ok(())
    }

    pub async fn get<'a, E>(id: IdeaId, exec: E) -> Result<Option<Idea>, DatabaseError>
    where
        E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query_as::<_, Idea>(
            "
            SELECT id, user_id, title, url, dev_name,
                   description, tag, competitors, open_source,
                   target_audience, problem_solved, launch_date,
                   tech_stack, team_size, repo_link, budget,
                   technologies, upvotes, downvotes, created
            FROM ideas
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(exec)
        .await?;

        Ok(result)
    }

    /// All ideas pending validation, newest first.
    pub async fn get_all<'a, E>(exec: E) -> Result<Vec<Idea>, DatabaseError>
    where
        E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
    {
        let results = sqlx::query_as::<_, Idea>(
            "
            SELECT id, user_id, title, url, dev_name,
                   description, tag, competitors, open_source,
                   target_audience, problem_solved, launch_date,
                   tech_stack, team_size, repo_link, budget,
                   technologies, upvotes, downvotes, created
            FROM ideas
            ORDER BY created DESC
            ",
        )
        .fetch_all(exec)
        .await?;

        Ok(results)
    }

    /// Applies a single vote to the matching counter as one atomic
    /// update. Returns false if no idea with the given id exists.
    pub async fn apply_vote(
        id: IdeaId,
        direction: VoteDirection,
        transaction: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> Result<bool, DatabaseError> {
        let query = match direction {
            VoteDirection::Up => "UPDATE ideas SET upvotes = upvotes + 1 WHERE id = ?",
            VoteDirection::Down => "UPDATE ideas SET downvotes = downvotes + 1 WHERE id = ?",
        };

        let result = sqlx::query(query)
            .bind(id)
            .execute(&mut **transaction)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct FeedbackBuilder {
    pub feedback_id: FeedbackId,
    pub idea_id: IdeaId,
    pub user_id: Option<String>,
    pub body: String,
    pub direction: VoteDirection,
}

impl FeedbackBuilder {
    pub async fn insert(
        self,
        transaction: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> Result<FeedbackId, DatabaseError> {
        sqlx::query(
            "
            INSERT INTO idea_feedback (
                id, idea_id, user_id, body, direction, created
            )
            VALUES (
                ?, ?, ?, ?, ?, ?
            )
            ",
        )
        .bind(self.feedback_id)
        .bind(self.idea_id)
        .bind(self.user_id.as_ref())
        .bind(&self.body)
        .bind(self.direction.as_str())
        .bind(Utc::now())
        .execute(&mut **transaction)
        .await?;

        Ok(self.feedback_id)
    }
}
