//! In-process application spawner for integration tests.

use std::sync::Arc;

use taskboard::api::create_router;
use taskboard::infrastructure::{AppConfig, AppDependencies, SqliteStore};
use tokio::net::TcpListener;

/// A running test instance of the application.
///
/// Each instance owns a private in-memory SQLite database, so tests
/// never observe each other's data. The server task is aborted when
/// the test's runtime shuts down.
pub struct TestApp {
    pub base_url: String,
}

/// Spawns the full application on an ephemeral localhost port.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(
        SqliteStore::in_memory()
            .await
            .expect("Failed to create in-memory store"),
    );

    let config = AppConfig::new(
        "sqlite::memory:".to_string(),
        "integration-test-secret".to_string(),
        3600,
        "127.0.0.1".to_string(),
        0,
    );

    let dependencies = AppDependencies::new(config, store.clone(), store.clone(), store);
    let router = create_router(dependencies);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Server task failed");
    });

    TestApp {
        base_url: format!("http://{addr}"),
    }
}
