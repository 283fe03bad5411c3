//! Question API models and DTOs

use serde::{Deserialize, Serialize};

use crate::api::models::{int_or_string, CategoryMap};
use crate::db::models::{NewQuestion, Question};

/// Question as returned by every listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl QuestionResponse {
    /// Create a QuestionResponse from the database Question model
    pub fn from_db_question(question: Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

/// Request to create a new question
///
/// All four keys are required. `category` and `difficulty` may be sent as
/// numbers or numeric strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "int_or_string")]
    pub category: i64,
    #[serde(deserialize_with = "int_or_string")]
    pub difficulty: i64,
}

impl CreateQuestionRequest {
    pub fn into_new_question(self) -> NewQuestion {
        NewQuestion::new(self.question, self.answer, self.category, self.difficulty)
    }
}

/// Request body of `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Query parameters for paginated endpoints
///
/// Built from the raw query pairs so that a repeated or malformed `page`
/// never rejects the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page; anything unparsable falls back to 1
    pub page: Option<String>,
}

impl PageQuery {
    /// Keep the first `page` value, ignoring every other parameter
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "page").then_some(value));
        Self { page }
    }

    pub fn page(&self) -> u32 {
        crate::services::pagination::parse_page(self.page.as_deref())
    }
}

/// Body of `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// No category is selected on the full listing
    pub current_category: Option<String>,
}

/// Body of `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Body of `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: i64,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

/// Body of `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub created: i64,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_string_numbers() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question": "Who are you", "answer": "A programmer", "category": "3", "difficulty": "1"}"#,
        )
        .unwrap();
        let new = req.into_new_question();
        assert_eq!(new.category, 3);
        assert_eq!(new.difficulty, 1);
    }

    #[test]
    fn test_create_request_requires_every_key() {
        let result = serde_json::from_str::<CreateQuestionRequest>(
            r#"{"question": "Who are you", "category": 3, "difficulty": 1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_search_request_uses_camel_case_key() {
        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.search_term, "title");
        assert!(serde_json::from_str::<SearchRequest>(r#"{"search": "title"}"#).is_err());
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        assert_eq!(PageQuery::default().page(), 1);
        assert_eq!(PageQuery { page: Some("3".to_string()) }.page(), 3);
        assert_eq!(PageQuery { page: Some("abc".to_string()) }.page(), 1);
    }

    #[test]
    fn test_page_query_takes_first_repeated_value() {
        let pairs = vec![
            ("sort".to_string(), "id".to_string()),
            ("page".to_string(), "2".to_string()),
            ("page".to_string(), "5".to_string()),
        ];
        let query = PageQuery::from_pairs(pairs);
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.page(), 2);
        assert_eq!(PageQuery::from_pairs(Vec::new()).page(), 1);
    }

    #[test]
    fn test_question_response_from_db() {
        let q = Question {
            id: 10,
            question: "La Giaconda is better known as what?".to_string(),
            answer: "Mona Lisa".to_string(),
            category: 2,
            difficulty: 3,
        };
        let resp = QuestionResponse::from_db_question(q);
        assert_eq!(resp.id, 10);
        assert_eq!(resp.category, 2);
    }
}
