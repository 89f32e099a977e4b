//! HTTP client wrapper for integration tests.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct TaskboardClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl TaskboardClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            token: None,
        }
    }

    /// Returns a copy of this client that sends the given bearer token.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.to_string()),
        }
    }

    // Health check
    pub async fn health(&self) -> ApiResult<HealthResponse> {
        self.get("/health").await
    }

    // Auth operations
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.post_no_content("/auth/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> ApiResult<TokenResponse> {
        self.post("/auth/login", request).await
    }

    // Task operations
    pub async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<TaskResponse> {
        self.post("/tasks", request).await
    }

    /// Creates a task from a raw JSON body, bypassing the typed request.
    pub async fn create_task_raw(&self, body: &Value) -> ApiResult<TaskResponse> {
        self.post("/tasks", body).await
    }

    pub async fn list_tasks(&self, status: Option<&str>) -> ApiResult<Vec<TaskResponse>> {
        let url = match status {
            Some(s) => format!("/tasks?status={s}"),
            None => "/tasks".to_string(),
        };
        self.get(&url).await
    }

    pub async fn get_task(&self, task_id: &str) -> ApiResult<TaskResponse> {
        self.get(&format!("/tasks/{task_id}")).await
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
    ) -> ApiResult<TaskResponse> {
        self.put(&format!("/tasks/{task_id}"), request).await
    }

    pub async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        self.delete(&format!("/tasks/{task_id}")).await
    }

    // Comment operations
    pub async fn create_comment(
        &self,
        task_id: &str,
        request: &CreateCommentRequest,
    ) -> ApiResult<CommentResponse> {
        self.post(&format!("/tasks/{task_id}/comments"), request)
            .await
    }

    pub async fn list_comments(&self, task_id: &str) -> ApiResult<Vec<CommentResponse>> {
        self.get(&format!("/tasks/{task_id}/comments")).await
    }

    // Internal helpers
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let builder = self.client.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        parse_response(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn post<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn post_no_content<R: Serialize>(&self, path: &str, body: &R) -> ApiResult<()> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        expect_no_content(response).await
    }

    #[allow(clippy::future_not_send)]
    async fn put<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        expect_no_content(response).await
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Api { status: StatusCode, code: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ApiError::Http)
    } else {
        Err(parse_error(status, response).await)
    }
}

async fn expect_no_content(response: Response) -> ApiResult<()> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, response).await)
    }
}

async fn parse_error(status: StatusCode, response: Response) -> ApiError {
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ApiError::Api {
            status,
            code: body.code,
        },
        Err(err) => ApiError::Http(err),
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
}

// DTO types for tests

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TaskResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub creator_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CommentResponse {
    pub id: String,
    pub task_id: String,
    pub author_id: String,
    pub text: String,
    pub created_at: String,
    pub author: Option<AuthorDto>,
}
