//! Route configuration.
//!
//! | Method | Path                        | Handler          | Auth |
//! |--------|-----------------------------|------------------|------|
//! | POST   | /auth/register              | `register`       | no   |
//! | POST   | /auth/login                 | `login`          | no   |
//! | POST   | /tasks                      | `create_task`    | yes  |
//! | GET    | /tasks                      | `list_tasks`     | yes  |
//! | GET    | /tasks/{id}                 | `get_task`       | yes  |
//! | PUT    | /tasks/{id}                 | `update_task`    | yes  |
//! | DELETE | /tasks/{id}                 | `delete_task`    | yes  |
//! | POST   | /tasks/{task_id}/comments   | `create_comment` | yes  |
//! | GET    | /tasks/{task_id}/comments   | `list_comments`  | yes  |
//! | GET    | /health                     | `health_check`   | no   |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::responses::HealthResponse;
use crate::api::handlers::auth::{login, register};
use crate::api::handlers::comments::{create_comment, list_comments};
use crate::api::handlers::tasks::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::infrastructure::AppDependencies;

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes over the given
/// dependency container.
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // Auth routes
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Task routes
        .route("/tasks", post(create_task).get(list_tasks))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        // Comment routes
        .route(
            "/tasks/{task_id}/comments",
            post(create_comment).get(list_comments),
        )
        // Health check
        .route("/health", get(health_check))
        .with_state(dependencies)
}
