//! Category endpoint handlers

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::IntoResponse,
};

use crate::api::{
    error::ApiResult,
    middleware::validation::path_id,
    models::PageQuery,
    response,
    routes::AppState,
};

/// List every category as an id → type mapping
///
/// GET /categories
pub async fn list_categories(State(app_state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = app_state.service.list_categories().await?;
    Ok(response::ok(categories))
}

/// List the questions of one category
///
/// GET /categories/:id/questions
pub async fn questions_in_category(
    State(app_state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<impl IntoResponse> {
    let id = path_id(id)?;
    let questions = app_state
        .service
        .questions_in_category(id, PageQuery::from_pairs(params).page())
        .await?;
    Ok(response::ok(questions))
}
