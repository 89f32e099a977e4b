//! Task entity, status enumeration, and partial-update patch.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow status of a task.
///
/// New tasks always start as `Pending`. Transitions are unconstrained:
/// any status may be set from any other status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet. The initial status of every task.
    #[default]
    Pending,
    /// Work has begun.
    InProgress,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns the wire/storage representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ParseTaskStatusError(other.to_string())),
        }
    }
}

/// A task owned by the user who created it.
///
/// `creator_id` is set at creation and never changes; ownership does not
/// transfer. Only the creator may update or delete the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier.
    pub id: Uuid,
    /// Short title, never empty.
    pub title: String,
    /// Longer free-form description, never empty.
    pub description: String,
    /// Current workflow status.
    pub status: TaskStatus,
    /// Id of the user who created the task. Immutable.
    pub creator_id: Uuid,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task with a fresh id and current timestamps.
    #[must_use]
    pub fn new(title: String, description: String, creator_id: Uuid) -> Self {
        let now = super::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: TaskStatus::Pending,
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a task: only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// New title, if set.
    pub title: Option<String>,
    /// New description, if set.
    pub description: Option<String>,
    /// New status, if set.
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Returns `true` when the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}
