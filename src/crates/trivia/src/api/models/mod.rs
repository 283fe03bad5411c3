//! API data transfer objects (DTOs) and response models
//!
//! Request bodies, endpoint response bodies and the serde helpers they share.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::{CategoriesResponse, CategoryMap, CategoryQuestionsResponse};
pub use question::{
    CreateQuestionRequest, CreatedResponse, DeletedResponse, PageQuery, QuestionPageResponse,
    QuestionResponse, SearchRequest, SearchResponse,
};
pub use quiz::{QuizCategory, QuizRequest, QuizResponse};

use serde::{de, Deserialize, Deserializer};

/// System health response
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// API version
    pub version: String,

    /// Current timestamp
    pub timestamp: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn new(status: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            database: database.into(),
            version: crate::version::VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accept `3` or `"3"` for integer fields the front end posts as strings
pub(crate) fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}
