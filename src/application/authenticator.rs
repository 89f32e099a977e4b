//! Credential verification and bearer-token issuance.
//!
//! Passwords are hashed with Argon2id using a fresh random salt per call;
//! hashing runs on the blocking pool so request handlers only suspend.
//! Access tokens are stateless HS256 JWTs signed with a server-held
//! secret, so a token cannot be revoked before its expiry.

use std::sync::Arc;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, User};
use crate::infrastructure::store::{StoreError, UserStore};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a hyphenated UUID string.
    pub sub: String,
    /// User email at issue time.
    pub email: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

/// Verifies credentials and issues and validates bearer tokens.
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_secs: u64,
}

impl Authenticator {
    /// Creates an authenticator over the given user store.
    ///
    /// Token expiry is validated exactly (no leeway): the server controls
    /// both issue and verification clocks.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, jwt_secret: &str, token_ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            users,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            validation,
            token_ttl_secs,
        }
    }

    /// Registers a new user.
    ///
    /// The duplicate check is not a pre-flight lookup: the insert relies
    /// on the store's uniqueness constraint, so two concurrent
    /// registrations of the same email cannot both win.
    ///
    /// # Errors
    ///
    /// - [`DomainError::Validation`] for a blank or address-less email,
    ///   or an empty password
    /// - [`DomainError::Conflict`] when the email is already registered
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<()> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation(
                "email",
                "must be a valid email address",
            ));
        }
        if password.is_empty() {
            return Err(DomainError::validation("password", "must not be empty"));
        }

        let password_hash = hash_password(password.to_string()).await?;
        let user = User::new(email.to_string(), password_hash);

        match self.users.insert_user(&user).await {
            Ok(()) => {
                tracing::info!(user_id = %user.id, "user registered");
                Ok(())
            }
            Err(StoreError::DuplicateEmail) => Err(DomainError::Conflict {
                email: email.to_string(),
            }),
            Err(other) => Err(other.into()),
        }
    }

    /// Verifies credentials and issues a signed access token.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Authentication`] for an unknown email and
    /// for a wrong password alike; the two cases are indistinguishable.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let Some(user) = self.users.find_user_by_email(email.trim()).await? else {
            return Err(DomainError::Authentication);
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            return Err(DomainError::Authentication);
        }

        tracing::debug!(user_id = %user.id, "login succeeded");
        self.issue_token(&user)
    }

    /// Validates a bearer token and resolves the user it names.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Authentication`] for a malformed, expired,
    /// or wrongly signed token, and for a token naming a user that no
    /// longer exists.
    pub async fn verify(&self, token: &str) -> DomainResult<User> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Authentication)?;
        let user_id =
            Uuid::parse_str(&data.claims.sub).map_err(|_| DomainError::Authentication)?;

        self.users
            .find_user_by_id(user_id)
            .await?
            .ok_or(DomainError::Authentication)
    }

    fn issue_token(&self, user: &User) -> DomainResult<String> {
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.token_ttl_secs).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now,
            exp: now.saturating_add(ttl),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(DomainError::storage)
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Authenticator")
            .field("users", &"<dyn UserStore>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish_non_exhaustive()
    }
}

/// Hashes a password with Argon2id and a fresh random salt, off the
/// async runtime.
async fn hash_password(password: String) -> DomainResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(DomainError::storage)
    })
    .await
    .map_err(DomainError::storage)?
}

/// Checks a password against a stored PHC hash, off the async runtime.
///
/// A mismatch is `Ok(false)`; only an unparseable stored hash or an
/// internal hashing failure is an error.
async fn verify_password(password: String, hash: String) -> DomainResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash).map_err(DomainError::storage)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(error) => Err(DomainError::storage(error)),
        }
    })
    .await
    .map_err(DomainError::storage)?
}
