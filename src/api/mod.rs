//! API layer: HTTP routing, DTOs, the bearer-token extractor, and the
//! mapping from domain errors onto status codes.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse};
pub use routes::create_router;
