//! Domain layer: entities, value types, and the error taxonomy.
//!
//! The entities here are plain data with id references (`creator_id`,
//! `task_id`, `author_id`) rather than bidirectional object links; related
//! records are fetched explicitly through the stores.

pub mod comment;
pub mod errors;
pub mod task;
pub mod user;

pub use comment::{Comment, CommentWithAuthor};
pub use errors::{DomainError, DomainResult};
pub use task::{Task, TaskPatch, TaskStatus};
pub use user::{PublicUser, User};

use chrono::{DateTime, Utc};

/// Returns the current time truncated to microsecond precision.
///
/// Timestamps are persisted as integer microseconds, so entities are
/// stamped at the same resolution to keep create-then-fetch round trips
/// exact.
#[must_use]
pub fn now() -> DateTime<Utc> {
    let micros = Utc::now().timestamp_micros();
    DateTime::from_timestamp_micros(micros).unwrap_or_default()
}
