use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quorum_api::config::Config;
use quorum_api::graphql::build_schema;
use quorum_api::repositories::UserRepository;
use quorum_api::routes::{graphql_router, health_router};
use quorum_api::services::{AuthConfig, AuthService};
use quorum_api::MIGRATOR;

async fn root() -> &'static str {
    "Welcome to Quorum - discussion forum API"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quorum_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Quorum API server on port {}", config.port);

    // Initialize database pool
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.connect_timeout_secs,
        ))
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database connection established");

    // Run migrations
    tracing::info!("Running database migrations...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrations completed successfully");

    // Create AuthService with the configured secret
    let auth_config = AuthConfig::new(config.jwt_secret.clone());
    let auth_service = AuthService::new(UserRepository::new(pool.clone()), auth_config);
    tracing::info!("AuthService initialized");

    // Build GraphQL schema
    let schema = build_schema(pool, auth_service.clone());
    tracing::info!("GraphQL schema built");

    // Build the router
    let app = Router::new()
        .route("/", get(root))
        // GraphQL endpoints: /graphql, /graphql/playground
        .merge(graphql_router(schema, auth_service))
        // Health routes: /health, /health/live
        .nest("/health", health_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "GraphQL Playground available at http://{}:{}/graphql/playground",
        addr.ip(),
        addr.port()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
