//! Outgoing response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Comment, CommentWithAuthor, PublicUser, Task, TaskStatus};

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed bearer token.
    pub access_token: String,
}

/// Public identity of a user as embedded in responses. Never carries the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// User email.
    pub email: String,
}

impl From<PublicUser> for UserResponse {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// A task as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task id.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Current status (`pending` | `in_progress` | `done`).
    pub status: TaskStatus,
    /// Id of the creating user.
    pub creator_id: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last-modification time.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            creator_id: task.creator_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// A comment as returned by the API, including its author's public
/// identity when the listing provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    /// Comment id.
    pub id: Uuid,
    /// Id of the task the comment belongs to.
    pub task_id: Uuid,
    /// Id of the comment's author.
    pub author_id: Uuid,
    /// Comment body.
    pub text: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Author's public identity; present in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserResponse>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            task_id: comment.task_id,
            author_id: comment.author_id,
            text: comment.text,
            created_at: comment.created_at,
            author: None,
        }
    }
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        let mut response = Self::from(entry.comment);
        response.author = Some(UserResponse::from(entry.author));
        response
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}
