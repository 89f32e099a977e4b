//! Comment creation and per-task listing.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, CommentWithAuthor, DomainError, DomainResult, User};
use crate::infrastructure::store::{CommentStore, TaskStore};

use super::require_non_empty;

/// Persists comments attached to existing tasks.
///
/// Comments are immutable; there is no update or delete operation. Any
/// authenticated user may comment on any existing task.
pub struct CommentRegistry {
    comments: Arc<dyn CommentStore>,
    tasks: Arc<dyn TaskStore>,
}

impl CommentRegistry {
    /// Creates a registry over the given stores.
    #[must_use]
    pub fn new(comments: Arc<dyn CommentStore>, tasks: Arc<dyn TaskStore>) -> Self {
        Self { comments, tasks }
    }

    /// Attaches a comment to an existing task.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] when the task does not exist
    /// - [`DomainError::Validation`] when the text is blank
    pub async fn create(
        &self,
        task_id: Uuid,
        text: String,
        author: &User,
    ) -> DomainResult<Comment> {
        self.require_task(task_id).await?;
        require_non_empty("text", &text)?;

        let comment = Comment::new(task_id, author.id, text);
        self.comments.insert_comment(&comment).await?;
        tracing::debug!(comment_id = %comment.id, task_id = %task_id, "comment created");
        Ok(comment)
    }

    /// Lists a task's comments newest-first, each with its author's
    /// public identity.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] when the task does not exist.
    pub async fn list_for_task(&self, task_id: Uuid) -> DomainResult<Vec<CommentWithAuthor>> {
        self.require_task(task_id).await?;
        Ok(self.comments.list_comments_for_task(task_id).await?)
    }

    async fn require_task(&self, task_id: Uuid) -> DomainResult<()> {
        self.tasks
            .find_task_by_id(task_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("task", task_id))
    }
}

impl std::fmt::Debug for CommentRegistry {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CommentRegistry")
            .field("comments", &"<dyn CommentStore>")
            .field("tasks", &"<dyn TaskStore>")
            .finish()
    }
}
