//! API route definitions
//!
//! Defines all API routes and their associated handler functions.

use axum::{
    middleware::map_response,
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::{handlers, middleware};
use crate::config::CorsConfig;
use crate::services::TriviaService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: TriviaService,
}

/// Build the complete API router
pub fn create_router(service: TriviaService, cors: &CorsConfig) -> Router {
    let app_state = AppState { service };

    Router::new()
        .route("/health", get(handlers::health))
        // Category endpoints
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::questions_in_category),
        )
        // Question endpoints
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        // Quiz endpoint
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(middleware::not_found)
        .with_state(app_state)
        .layer(map_response(middleware::json_error_envelope))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(middleware::cors_from_config(cors))
        .layer(middleware::logging_layer())
}
