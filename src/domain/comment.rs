//! Comment entity.
//!
//! Comments are immutable once created: there is no update or standalone
//! delete operation. A comment references its task and author by id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::user::PublicUser;

/// A comment attached to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Unique identifier.
    pub id: Uuid,
    /// Id of the task this comment belongs to. Immutable.
    pub task_id: Uuid,
    /// Id of the user who wrote the comment. Immutable.
    pub author_id: Uuid,
    /// Comment body, never empty.
    pub text: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment with a fresh id and current timestamp.
    #[must_use]
    pub fn new(task_id: Uuid, author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            author_id,
            text,
            created_at: super::now(),
        }
    }
}

/// A comment joined with its author's public identity, as returned by
/// task comment listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    /// The comment itself.
    pub comment: Comment,
    /// Public identity of the comment's author.
    pub author: PublicUser,
}
