use axum::{Extension, Router};
use sqlx::SqlitePool;
use tracing::warn;
use util::cors::default_cors;
use util::env::{parse_strings_from_var, parse_var};

pub mod database;
pub mod models;
pub mod routes;
pub mod util;

#[derive(Clone)]
pub struct IdeahuntConfig {
    pub pool: SqlitePool,
}

pub fn app_setup(pool: SqlitePool) -> IdeahuntConfig {
    IdeahuntConfig { pool }
}

pub fn app_config(config: IdeahuntConfig) -> Router {
    Router::new()
        .nest(
            "/response/api",
            routes::responses_config().layer(default_cors()),
        )
        .merge(routes::root_config())
        .fallback(routes::not_found)
        .layer(Extension(config.pool))
}

// This is so that env vars not used immediately don't panic at runtime
pub fn check_env_vars() -> bool {
    let mut failed = false;

    fn check_var<T: std::str::FromStr>(var: &'static str) -> bool {
        let check = parse_var::<T>(var).is_none();
        if check {
            warn!(
                "Variable `{}` missing in dotenv or not of type `{}`",
                var,
                std::any::type_name::<T>()
            );
        }
        check
    }

    failed |= check_var::<String>("BIND_ADDR");
    failed |= check_var::<String>("DATABASE_URL");
    failed |= check_var::<u32>("DATABASE_MIN_CONNECTIONS");
    failed |= check_var::<u32>("DATABASE_MAX_CONNECTIONS");

    if parse_strings_from_var("CORS_ALLOWED_ORIGINS").is_none() {
        warn!("Variable `CORS_ALLOWED_ORIGINS` missing in dotenv or not a json array of strings");
        failed |= true;
    }

    failed
}
