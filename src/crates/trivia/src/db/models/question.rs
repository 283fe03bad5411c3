//! Question model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A trivia question as stored in the `questions` table
///
/// `category` holds the integer id of a [`Category`](super::Category). The
/// reference is not enforced by the store, so a question may point at a
/// category that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Store-generated identifier
    pub id: i64,

    /// Question text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Category id
    pub category: i64,

    /// Difficulty score
    pub difficulty: i64,
}

/// Fields needed to insert a question; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }
}
