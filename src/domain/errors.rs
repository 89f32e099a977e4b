//! Error taxonomy shared by all application services.
//!
//! Every variant is a terminal outcome of a single request; nothing here
//! is retried internally. The API layer maps each variant onto a stable
//! HTTP status, so services never reason about transport codes.

use thiserror::Error;

/// Result alias for application-service operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Typed errors produced by the authenticator and the registries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A unique key is already taken (duplicate email at registration).
    #[error("email already registered: {email}")]
    Conflict {
        /// The email that collided.
        email: String,
    },

    /// Bad credentials or an invalid, expired, or missing token.
    ///
    /// Deliberately carries no detail: "no such user" and "wrong
    /// password" must be indistinguishable to the caller.
    #[error("invalid credentials")]
    Authentication,

    /// The actor is authenticated but not permitted (ownership mismatch).
    #[error("{0}")]
    Authorization(String),

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up ("task", "user", ...).
        entity: &'static str,
        /// The id that missed.
        id: String,
    },

    /// Malformed input that survived transport-level checks.
    #[error("{field}: {message}")]
    Validation {
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A persistence or hashing failure outside the caller's control.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    /// Builds a [`DomainError::NotFound`] for the given entity kind and id.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Builds a [`DomainError::Validation`] for the given field.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Builds a [`DomainError::Storage`] from any displayable cause.
    #[must_use]
    pub fn storage(cause: impl ToString) -> Self {
        Self::Storage(cause.to_string())
    }
}
