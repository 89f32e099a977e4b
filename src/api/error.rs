//! API error shape and the domain-to-HTTP status mapping.
//!
//! Every [`DomainError`] kind maps onto exactly one status code, so the
//! error contract stays stable regardless of which handler produced it:
//!
//! | Domain error   | HTTP status | Error code           |
//! |----------------|-------------|----------------------|
//! | Conflict       | 409         | EMAIL_ALREADY_EXISTS |
//! | Authentication | 401         | INVALID_CREDENTIALS  |
//! | Authorization  | 403         | FORBIDDEN            |
//! | NotFound       | 404         | NOT_FOUND            |
//! | Validation     | 400         | VALIDATION_FAILED    |
//! | Storage        | 500         | INTERNAL_ERROR       |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::DomainError;

/// JSON body of an error response.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "NOT_FOUND",
///     "message": "task not found: ...",
///     "details": { "entity": "task", "id": "..." }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional structured context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates an error without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error with structured details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// An [`ApiError`] together with its HTTP status.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DomainError> for ApiErrorResponse {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Conflict { email } => Self::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "EMAIL_ALREADY_EXISTS",
                    "email already registered",
                    serde_json::json!({ "email": email }),
                ),
            ),
            DomainError::Authentication => Self::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("INVALID_CREDENTIALS", "invalid credentials"),
            ),
            DomainError::Authorization(message) => Self::new(
                StatusCode::FORBIDDEN,
                ApiError::new("FORBIDDEN", message),
            ),
            DomainError::NotFound { entity, id } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "NOT_FOUND",
                    format!("{entity} not found: {id}"),
                    serde_json::json!({ "entity": entity, "id": id }),
                ),
            ),
            DomainError::Validation { field, message } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "VALIDATION_FAILED",
                    format!("{field}: {message}"),
                    serde_json::json!({ "field": field }),
                ),
            ),
            DomainError::Storage(cause) => {
                tracing::error!(%cause, "request failed on storage");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "internal server error"),
                )
            }
        }
    }
}
