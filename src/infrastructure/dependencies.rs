//! Dependency container wiring the application services.
//!
//! Services are built by explicit construction: each one receives its
//! persistence dependency as a trait object here, and the container is
//! cloned into every request handler as the axum router state.

use std::sync::Arc;

use crate::application::{Authenticator, CommentRegistry, TaskRegistry};

use super::config::AppConfig;
use super::store::{CommentStore, TaskStore, UserStore};

/// Application dependency container.
///
/// Cheap to clone; all services sit behind `Arc`.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    authenticator: Arc<Authenticator>,
    task_registry: Arc<TaskRegistry>,
    comment_registry: Arc<CommentRegistry>,
}

impl AppDependencies {
    /// Builds the container, constructing the three services over the
    /// given stores.
    #[must_use]
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        tasks: Arc<dyn TaskStore>,
        comments: Arc<dyn CommentStore>,
    ) -> Self {
        let authenticator = Arc::new(Authenticator::new(
            users,
            &config.jwt_secret,
            config.token_ttl_secs,
        ));
        let task_registry = Arc::new(TaskRegistry::new(tasks.clone()));
        let comment_registry = Arc::new(CommentRegistry::new(comments, tasks));
        Self {
            config,
            authenticator,
            task_registry,
            comment_registry,
        }
    }

    /// Returns the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the authenticator.
    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Returns the task registry.
    #[must_use]
    pub fn task_registry(&self) -> &TaskRegistry {
        &self.task_registry
    }

    /// Returns the comment registry.
    #[must_use]
    pub fn comment_registry(&self) -> &CommentRegistry {
        &self.comment_registry
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("authenticator", &"<Authenticator>")
            .field("task_registry", &"<TaskRegistry>")
            .field("comment_registry", &"<CommentRegistry>")
            .finish()
    }
}
