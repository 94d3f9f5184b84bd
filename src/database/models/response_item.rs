use super::ids::ResponseId;
use super::DatabaseError;
use crate::models::responses::Analysis;
use chrono::{DateTime, Utc};
use sqlx::types::Json;

pub struct ResponseBuilder {
    pub response_id: ResponseId,
    pub user_id: Option<String>,
    pub dev_name: Option<String>,
    pub analysis: Analysis,
}

impl ResponseBuilder {
    pub async fn insert(
        self,
        transaction: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    ) -> Result<ResponseId, DatabaseError> {
        sqlx::query(
            "
            INSERT INTO responses (
                id, user_id, dev_name, analysis, created
            )
            VALUES (
                ?, ?, ?, ?, ?
            )
            ",
        )
        .bind(self.response_id)
        .bind(self.user_id.as_ref())
        .bind(self.dev_name.as_ref())
        .bind(Json(&self.analysis))
        .bind(Utc::now())
        .execute(&mut **transaction)
        .await?;

        Ok(self.response_id)
    }
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Response {
    pub id: ResponseId,
    pub user_id: Option<String>,
    pub dev_name: Option<String>,
    pub analysis: Json<Analysis>,
    pub created: DateTime<Utc>,
}

impl Response {
    pub async fn get<'a, E>(id: ResponseId, exec: E) -> Result<Option<Response>, DatabaseError>
    where
        E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query_as::<_, Response>(
            "
            SELECT id, user_id, dev_name, analysis, created
            FROM responses
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(exec)
        .await?;

        Ok(result)
    }

    /// Every stored analysis record, newest first.
    pub async fn get_all<'a, E>(exec: E) -> Result<Vec<Response>, DatabaseError>
    where
        E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
    {
        let results = sqlx::query_as::<_, Response>(
            "
            SELECT id, user_id, dev_name, analysis, created
            FROM responses
            ORDER BY created DESC
            ",
        )
        .fetch_all(exec)
        .await?;

        Ok(results)
    }

    /// The analysis records a single user has submitted, newest first.
    pub async fn get_many_user<'a, E>(
        user_id: &str,
        exec: E,
    ) -> Result<Vec<Response>, DatabaseError>
    where
        E: sqlx::Executor<'a, Database = sqlx::Sqlite>,
    {
        let results = sqlx::query_as::<_, Response>(
            "
            SELECT id, user_id, dev_name, analysis, created
            FROM responses
            WHERE user_id = ?
            ORDER BY created DESC
            ",
        )
        .bind(user_id)
        .fetch_all(exec)
        .await?;

        Ok(results)
    }
}
