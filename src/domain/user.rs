//! User entity and its public projection.
//!
//! The full [`User`] carries the Argon2 password hash and is confined to
//! the authenticator and the persistence layer. Everything that leaves the
//! service boundary uses [`PublicUser`], which holds only the id and email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The `password_hash` field is a PHC-format Argon2id hash with an
/// embedded per-call salt. It is never serialized; this type deliberately
/// does not implement `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier.
    pub id: Uuid,
    /// Email address, unique across all users.
    pub email: String,
    /// Salted one-way hash of the password (PHC string format).
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user record was last modified.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh id and current timestamps.
    #[must_use]
    pub fn new(email: String, password_hash: String) -> Self {
        let now = super::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the public projection of this user.
    #[must_use]
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// The externally visible identity of a user: id and email only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Unique identifier.
    pub id: Uuid,
    /// Email address.
    pub email: String,
}
