//! Health check endpoint handler

use axum::{extract::State, http::StatusCode, Json};

use crate::api::{models::HealthResponse, response::SuccessResponse, routes::AppState};

/// Handler for GET /health
///
/// Reports whether the store answers a trivial query.
pub async fn health(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<SuccessResponse<HealthResponse>>) {
    match app_state.service.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(SuccessResponse::new(HealthResponse::new("ok", "connected"))),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            let mut body = SuccessResponse::new(HealthResponse::new("error", "error"));
            body.success = false;
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}
