use ideahunt::{check_env_vars, database};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ideahunt=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if check_env_vars() {
        error!("Some environment variables are missing!");
    }

    info!(
        "Starting ideahunt on {}",
        dotenvy::var("BIND_ADDR").unwrap()
    );

    database::check_for_migrations()
        .await
        .expect("An error occurred while running migrations.");

    // Database Connector
    let pool = database::connect()
        .await
        .expect("Database connection failed");

    let config = ideahunt::app_setup(pool);

    let app = ideahunt::app_config(config).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(dotenvy::var("BIND_ADDR").unwrap()).await?;
    axum::serve(listener, app).await
}
