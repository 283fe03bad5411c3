//! Quiz play endpoint handler

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::api::{
    error::ApiResult, middleware::validation::json_body, models::QuizRequest, response,
    routes::AppState,
};

/// Next random question of a quiz round
///
/// POST /quizzes
pub async fn play_quiz(
    State(app_state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let req = json_body(body)?;
    let next = app_state.service.play_quiz(req).await?;
    Ok(response::ok(next))
}
