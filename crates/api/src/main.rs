use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::{build_router, GRAPHQL_PATH, PLAYGROUND_PATH};
use api::config::AppConfig;
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Failures are logged once, by `main`.
    let pool = config
        .db
        .connect(config.max_connections)
        .await
        .context("Database connection failed")?;
    tracing::info!(
        host = %config.db.host,
        database = %config.db.name,
        "Database connected with max {} connections",
        config.max_connections
    );

    if config.skip_migrations {
        tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
    } else {
        tracing::info!("Running database migrations...");
        infra::db::run_migrations(&pool).await?;
        tracing::info!("Database migrations completed successfully");
    }

    let state = AppState::new(pool);
    let schema = build_schema(state.clone(), config.introspection);
    let app = build_router(state, schema, &config.allowed_origins);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        "Server ready at http://localhost:{}{}",
        config.port,
        GRAPHQL_PATH
    );
    tracing::info!(
        "GraphQL Playground at http://localhost:{}{}",
        config.port,
        PLAYGROUND_PATH
    );

    axum::serve(listener, app).await?;
    Ok(())
}
