//! Comment handlers, nested under a task. All routes require a bearer
//! token.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::CreateCommentRequest;
use crate::api::dto::responses::CommentResponse;
use crate::api::error::ApiErrorResponse;
use crate::api::extract::AuthenticatedUser;
use crate::infrastructure::AppDependencies;

use super::parse_id;

/// POST /tasks/{task_id}/comments - Comment on an existing task.
///
/// # Response
///
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Blank text
/// - `404 Not Found` - No task with that id
pub async fn create_comment(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(task_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiErrorResponse> {
    let task_id = parse_id(&task_id, "task_id")?;
    let comment = dependencies
        .comment_registry()
        .create(task_id, request.text, &user)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}

/// GET /tasks/{task_id}/comments - List a task's comments newest-first.
///
/// Each comment carries its author's public identity (id and email).
///
/// # Response
///
/// - `200 OK` - Comments in descending creation order
/// - `404 Not Found` - No task with that id
pub async fn list_comments(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(task_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, ApiErrorResponse> {
    let task_id = parse_id(&task_id, "task_id")?;
    let comments = dependencies
        .comment_registry()
        .list_for_task(task_id)
        .await?;
    Ok(Json(
        comments.into_iter().map(CommentResponse::from).collect(),
    ))
}
