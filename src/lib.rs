//! Task-management REST backend.
//!
//! Users register and authenticate, create and manage tasks, and attach
//! comments to tasks. Mutation of a task is restricted to its creator;
//! comments are immutable once created.
//!
//! # Architecture
//!
//! The crate follows an onion layout:
//!
//! - **Domain layer**: entities, the status enumeration, and the typed
//!   error taxonomy
//! - **Application layer**: the authenticator and the task/comment
//!   registries, built by explicit construction over store traits
//! - **Infrastructure layer**: configuration, the SQLite store, and the
//!   dependency container
//! - **API layer**: axum routes, DTOs, the bearer-token extractor, and
//!   the error-to-status mapping

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
