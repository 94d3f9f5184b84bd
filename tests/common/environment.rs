use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::future::Future;

pub struct TestEnvironment {
    pub server: TestServer,
    pub pool: SqlitePool,
}

impl TestEnvironment {
    pub async fn build() -> Self {
        // A single connection keeps every query on the same in-memory
        // database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Database connection failed");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Error while running database migrations!");

        let config = ideahunt::app_setup(pool.clone());
        let server = TestServer::new(ideahunt::app_config(config)).unwrap();

        TestEnvironment { server, pool }
    }
}

pub async fn with_test_environment<F, Fut>(f: F)
where
    F: FnOnce(TestEnvironment) -> Fut,
    Fut: Future<Output = ()>,
{
    let env = TestEnvironment::build().await;
    f(env).await;
}
