//! Application layer: the authenticator and the two registries.
//!
//! Services are plain structs holding their persistence dependency behind
//! a trait object; they are constructed explicitly by the dependency
//! container and carry no transport knowledge.

pub mod authenticator;
pub mod comment_registry;
pub mod task_registry;

pub use authenticator::Authenticator;
pub use comment_registry::CommentRegistry;
pub use task_registry::TaskRegistry;

use crate::domain::{DomainError, DomainResult};

/// Rejects empty or whitespace-only field values.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        Err(DomainError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}
