//! Taskboard server entry point.

use std::sync::Arc;

use taskboard::api::routes::create_router;
use taskboard::infrastructure::{AppConfig, AppDependencies, SqliteStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,taskboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting taskboard...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Failed to load configuration: {error}");
            std::process::exit(1);
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Connect to the database and bootstrap the schema
    let store = match SqliteStore::connect(&config.database_url).await {
        Ok(store) => Arc::new(store),
        Err(error) => {
            tracing::error!("Failed to open database {}: {error}", config.database_url);
            std::process::exit(1);
        }
    };
    tracing::info!(database_url = %config.database_url, "database ready");

    // Create dependencies container and router
    let deps = AppDependencies::new(config, store.clone(), store.clone(), store);
    let app = create_router(deps)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("taskboard listening on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST   /auth/register             - Register");
    tracing::info!("  POST   /auth/login                - Login");
    tracing::info!("  POST   /tasks                     - Create task");
    tracing::info!("  GET    /tasks                     - List tasks");
    tracing::info!("  GET    /tasks/:id                 - Get task");
    tracing::info!("  PUT    /tasks/:id                 - Update task");
    tracing::info!("  DELETE /tasks/:id                 - Delete task");
    tracing::info!("  POST   /tasks/:id/comments        - Create comment");
    tracing::info!("  GET    /tasks/:id/comments        - List comments");
    tracing::info!("  GET    /health                    - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("taskboard stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
