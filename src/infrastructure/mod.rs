//! Infrastructure layer: configuration, persistence, and the dependency
//! container wiring the application services together.

pub mod config;
pub mod dependencies;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use store::{CommentStore, SqliteStore, StoreError, TaskStore, UserStore};
