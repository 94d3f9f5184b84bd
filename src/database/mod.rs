pub mod models;
mod sqlite_database;

pub use models::DatabaseError;
pub use sqlite_database::check_for_migrations;
pub use sqlite_database::connect;
