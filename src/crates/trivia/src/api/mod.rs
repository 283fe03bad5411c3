//! REST API Layer for the trivia service
//!
//! Provides the HTTP endpoints for categories, questions, search and quiz
//! play, the uniform JSON envelopes, and the middleware stack.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiErrorResponse, ApiResult};
pub use response::SuccessResponse;
pub use routes::{create_router, AppState};
