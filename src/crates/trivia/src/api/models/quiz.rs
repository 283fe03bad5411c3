//! Quiz API models

use serde::{Deserialize, Serialize};

use crate::api::models::{int_or_string, QuestionResponse};

/// Category chosen on the play screen; id 0 means every category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Request body of `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Ids already asked in this round
    pub previous_questions: Vec<i64>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub question: QuestionResponse,
    #[serde(rename = "previousQuestion")]
    pub previous_question: Vec<i64>,
}
