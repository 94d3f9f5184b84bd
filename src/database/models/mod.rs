use thiserror::Error;

pub mod idea_item;
pub mod ids;
pub mod response_item;

pub use ids::*;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Error while interacting with the database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Error while trying to generate random ID")]
    RandomId,
}
