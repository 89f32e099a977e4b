//! Task creation, listing, and creator-only mutation.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Task, TaskPatch, TaskStatus, User};
use crate::infrastructure::store::TaskStore;

use super::require_non_empty;

/// Persists tasks and enforces the creator-only mutation rule.
pub struct TaskRegistry {
    tasks: Arc<dyn TaskStore>,
}

impl TaskRegistry {
    /// Creates a registry over the given task store.
    #[must_use]
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Creates a new task for `creator`.
    ///
    /// The task always starts as [`TaskStatus::Pending`]; any status the
    /// caller may have supplied upstream is ignored by construction.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when the title or description
    /// is blank.
    pub async fn create(
        &self,
        title: String,
        description: String,
        creator: &User,
    ) -> DomainResult<Task> {
        require_non_empty("title", &title)?;
        require_non_empty("description", &description)?;

        let task = Task::new(title, description, creator.id);
        self.tasks.insert_task(&task).await?;
        tracing::debug!(task_id = %task.id, creator_id = %creator.id, "task created");
        Ok(task)
    }

    /// Lists all tasks in creation order, optionally restricted to one
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Storage`] on a persistence failure.
    pub async fn list(&self, status: Option<TaskStatus>) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.list_tasks(status).await?)
    }

    /// Fetches a task by id.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] when no task has that id.
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<Task> {
        self.tasks
            .find_task_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("task", id))
    }

    /// Applies the provided fields of `patch` to the task.
    ///
    /// Status transitions are unconstrained; any status may replace any
    /// other.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] when the task does not exist
    /// - [`DomainError::Authorization`] when `actor` is not the creator
    /// - [`DomainError::Validation`] when a provided title or description
    ///   is blank
    pub async fn update(&self, id: Uuid, patch: TaskPatch, actor: &User) -> DomainResult<Task> {
        let mut task = self.get_by_id(id).await?;
        Self::check_ownership(&task, actor, "update")?;

        if let Some(title) = patch.title {
            require_non_empty("title", &title)?;
            task.title = title;
        }
        if let Some(description) = patch.description {
            require_non_empty("description", &description)?;
            task.description = description;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = crate::domain::now();

        self.tasks.update_task(&task).await?;
        Ok(task)
    }

    /// Deletes the task and, with it, its comments.
    ///
    /// # Errors
    ///
    /// - [`DomainError::NotFound`] when the task does not exist
    /// - [`DomainError::Authorization`] when `actor` is not the creator
    pub async fn delete(&self, id: Uuid, actor: &User) -> DomainResult<()> {
        let task = self.get_by_id(id).await?;
        Self::check_ownership(&task, actor, "delete")?;

        self.tasks.delete_task(id).await?;
        tracing::debug!(task_id = %id, "task deleted");
        Ok(())
    }

    fn check_ownership(task: &Task, actor: &User, action: &str) -> DomainResult<()> {
        if task.creator_id == actor.id {
            Ok(())
        } else {
            Err(DomainError::Authorization(format!(
                "you can only {action} your own tasks"
            )))
        }
    }
}

impl std::fmt::Debug for TaskRegistry {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("TaskRegistry")
            .field("tasks", &"<dyn TaskStore>")
            .finish()
    }
}
