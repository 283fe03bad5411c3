//! Category API models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::models::QuestionResponse;
use crate::db::models::Category;

/// Category id to label; ids serialize as JSON object keys
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the id → type mapping from category rows
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Body of `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// Body of `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    /// Label of the requested category
    pub current_category: String,
}
