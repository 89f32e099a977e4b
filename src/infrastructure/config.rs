//! Application configuration management.
//!
//! Configuration is loaded once at startup from environment variables
//! (a `.env` file is honored if present). Missing or invalid values
//! produce a typed [`ConfigError`] with the offending key.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable has an unparseable value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Application configuration.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (optional, default
///   `sqlite:taskboard.db`)
/// - `JWT_SECRET`: secret for signing access tokens (required)
/// - `TOKEN_TTL_SECS`: access-token lifetime in seconds (optional,
///   default 3600)
/// - `APP_HOST`: HTTP bind address (optional, default `0.0.0.0`)
/// - `APP_PORT`: HTTP port (optional, default 8080)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite connection string.
    pub database_url: String,
    /// Server-held secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
    /// Access-token lifetime in seconds.
    pub token_ttl_secs: u64,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if `JWT_SECRET` is unset and
    /// [`ConfigError::InvalidValue`] if a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignored when absent)
        dotenvy::dotenv().ok();

        let database_url = get_optional_env("DATABASE_URL", "sqlite:taskboard.db".to_string());
        let jwt_secret = get_required_env("JWT_SECRET")?;
        let token_ttl_secs = get_optional_env_parsed("TOKEN_TTL_SECS", 3600)?;
        let app_host = get_optional_env("APP_HOST", "0.0.0.0".to_string());
        let app_port = get_optional_env_parsed("APP_PORT", 8080)?;

        Ok(Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            app_host,
            app_port,
        })
    }

    /// Creates a configuration from explicit values, bypassing the
    /// environment. Used by tests and embedders.
    #[must_use]
    pub const fn new(
        database_url: String,
        jwt_secret: String,
        token_ttl_secs: u64,
        app_host: String,
        app_port: u16,
    ) -> Self {
        Self {
            database_url,
            jwt_secret,
            token_ttl_secs,
            app_host,
            app_port,
        }
    }
}

/// Gets a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

/// Gets an optional environment variable and parses it, with a default.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: error.to_string(),
                })
        },
    )
}
