//! Question endpoint handlers
//!
//! Listing, creation, deletion and search.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};

use crate::api::{
    error::ApiResult,
    middleware::validation::{json_body, json_entity, path_id},
    models::{CreateQuestionRequest, PageQuery, SearchRequest},
    response,
    routes::AppState,
};

/// List one page of questions with the category mapping
///
/// GET /questions?page=N
pub async fn list_questions(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<impl IntoResponse> {
    let page = PageQuery::from_pairs(params).page();
    let page = app_state.service.list_questions(page).await?;
    Ok(response::ok(page))
}

/// Create a new question
///
/// POST /questions
pub async fn create_question(
    State(app_state): State<AppState>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let req = json_entity(body)?;
    let created = app_state.service.create_question(req).await?;
    Ok(response::ok(created))
}

/// Delete a question
///
/// DELETE /questions/:id
pub async fn delete_question(
    State(app_state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let id = path_id(id)?;
    let deleted = app_state.service.delete_question(id).await?;
    Ok(response::ok(deleted))
}

/// Search question text
///
/// POST /search
pub async fn search_questions(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let req = json_body(body)?;
    let found = app_state
        .service
        .search_questions(&req.search_term, PageQuery::from_pairs(params).page())
        .await?;
    Ok(response::ok(found))
}
