//! Bearer-token extractor for protected routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::domain::User;
use crate::infrastructure::AppDependencies;

use super::error::ApiErrorResponse;

/// The user resolved from the request's `Authorization: Bearer` header.
///
/// Adding this extractor to a handler makes the route protected: the
/// token is verified on every request, and any failure (missing header,
/// malformed scheme, bad signature, expiry, unknown user) rejects with
/// 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppDependencies> for AuthenticatedUser {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppDependencies,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            ApiErrorResponse::from(crate::domain::DomainError::Authentication)
        })?;

        let user = state.authenticator().verify(token).await?;
        Ok(Self(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
