//! Request and response DTOs for the HTTP API.

pub mod requests;
pub mod responses;

pub use requests::{
    CreateCommentRequest, CreateTaskRequest, LoginRequest, RegisterRequest, UpdateTaskRequest,
};
pub use responses::{
    CommentResponse, HealthResponse, TaskResponse, TokenResponse, UserResponse,
};
