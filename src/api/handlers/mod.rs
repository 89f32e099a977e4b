//! HTTP handlers.

pub mod auth;
pub mod comments;
pub mod tasks;

use axum::http::StatusCode;
use uuid::Uuid;

use super::error::{ApiError, ApiErrorResponse};

/// Parses a path segment as a UUID, rejecting with 400 otherwise.
pub(crate) fn parse_id(value: &str, field: &str) -> Result<Uuid, ApiErrorResponse> {
    Uuid::parse_str(value).map_err(|_| {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "VALIDATION_FAILED",
                format!("{field}: must be a valid UUID"),
                serde_json::json!({ "field": field, "value": value }),
            ),
        )
    })
}
