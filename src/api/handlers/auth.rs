//! Authentication handlers.
//!
//! - `POST /auth/register` - Register a new user
//! - `POST /auth/login` - Exchange credentials for a bearer token

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::api::dto::requests::{LoginRequest, RegisterRequest};
use crate::api::dto::responses::TokenResponse;
use crate::api::error::ApiErrorResponse;
use crate::infrastructure::AppDependencies;

/// POST /auth/register - Register a new user.
///
/// # Response
///
/// - `201 Created` - User registered
/// - `400 Bad Request` - Malformed email or empty password
/// - `409 Conflict` - Email already registered
pub async fn register(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiErrorResponse> {
    dependencies
        .authenticator()
        .register(&request.email, &request.password)
        .await?;
    Ok(StatusCode::CREATED)
}

/// POST /auth/login - Exchange credentials for a bearer token.
///
/// # Response
///
/// - `200 OK` - `{"access_token": "..."}`
/// - `401 Unauthorized` - Invalid credentials (unknown email and wrong
///   password are indistinguishable)
pub async fn login(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiErrorResponse> {
    let access_token = dependencies
        .authenticator()
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(TokenResponse { access_token }))
}
