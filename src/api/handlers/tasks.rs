//! Task handlers. All routes require a bearer token.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::api::dto::requests::{CreateTaskRequest, UpdateTaskRequest};
use crate::api::dto::responses::TaskResponse;
use crate::api::error::{ApiError, ApiErrorResponse};
use crate::api::extract::AuthenticatedUser;
use crate::domain::TaskStatus;
use crate::infrastructure::AppDependencies;

use super::parse_id;

/// Query parameters of `GET /tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Optional status filter (`pending` | `in_progress` | `done`).
    pub status: Option<String>,
}

/// POST /tasks - Create a new task.
///
/// The task always starts as `pending`; a `status` field in the request
/// body is ignored.
///
/// # Response
///
/// - `201 Created` - The created task
/// - `400 Bad Request` - Blank title or description
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse> {
    let task = dependencies
        .task_registry()
        .create(request.title, request.description, &user)
        .await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// GET /tasks - List all tasks, optionally filtered by status.
///
/// # Response
///
/// - `200 OK` - Tasks in creation order
/// - `400 Bad Request` - Unrecognized status value
pub async fn list_tasks(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let tasks = dependencies.task_registry().list(status).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// GET /tasks/{id} - Fetch a single task.
///
/// # Response
///
/// - `200 OK` - The task
/// - `404 Not Found` - No task with that id
pub async fn get_task(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(_user): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let id = parse_id(&id, "id")?;
    let task = dependencies.task_registry().get_by_id(id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// PUT /tasks/{id} - Partially update a task.
///
/// # Response
///
/// - `200 OK` - The updated task
/// - `403 Forbidden` - Caller is not the task's creator
/// - `404 Not Found` - No task with that id
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiErrorResponse> {
    let id = parse_id(&id, "id")?;
    let task = dependencies
        .task_registry()
        .update(id, request.into(), &user)
        .await?;
    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id} - Delete a task and its comments.
///
/// # Response
///
/// - `204 No Content` - Task deleted
/// - `403 Forbidden` - Caller is not the task's creator
/// - `404 Not Found` - No task with that id
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    let id = parse_id(&id, "id")?;
    dependencies.task_registry().delete(id, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_status(value: &str) -> Result<TaskStatus, ApiErrorResponse> {
    value.parse().map_err(|_| {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "VALIDATION_FAILED",
                "status: must be one of pending, in_progress, done",
                serde_json::json!({ "field": "status", "value": value }),
            ),
        )
    })
}
