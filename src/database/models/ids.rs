use super::DatabaseError;
use crate::models::ids::random_base62_rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

const ID_RETRY_COUNT: usize = 20;

macro_rules! generate_ids {
    ($vis:vis $function_name:ident, $return_type:ty, $id_length:expr, $select_stmnt:literal, $id_function:expr) => {
        $vis async fn $function_name(
            con: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        ) -> Result<$return_type, DatabaseError> {
            let mut rng = ChaCha20Rng::from_entropy();
            let length = $id_length;
            let mut id = random_base62_rng(&mut rng, length);
            let mut retry_count = 0;

            // Check if ID is unique
            loop {
                let results: (i64,) = sqlx::query_as($select_stmnt)
                    .bind(id as i64)
                    .fetch_one(&mut **con)
                    .await?;

                if results.0 == 0 {
                    break;
                }

                id = random_base62_rng(&mut rng, length);

                retry_count += 1;
                if retry_count > ID_RETRY_COUNT {
                    return Err(DatabaseError::RandomId);
                }
            }

            Ok($id_function(id as i64))
        }
    };
}

generate_ids!(
    pub generate_idea_id,
    IdeaId,
    8,
    "SELECT COUNT(*) FROM ideas WHERE id = ?",
    IdeaId
);
generate_ids!(
    pub generate_response_id,
    ResponseId,
    8,
    "SELECT COUNT(*) FROM responses WHERE id = ?",
    ResponseId
);
generate_ids!(
    pub generate_feedback_id,
    FeedbackId,
    8,
    "SELECT COUNT(*) FROM idea_feedback WHERE id = ?",
    FeedbackId
);

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct IdeaId(pub i64);

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct ResponseId(pub i64);

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct FeedbackId(pub i64);
