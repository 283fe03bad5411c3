//! API request handlers
//!
//! Thin adapters: extract input, call [`TriviaService`](crate::services::TriviaService),
//! wrap the result.

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

pub use categories::{list_categories, questions_in_category};
pub use health::health;
pub use questions::{create_question, delete_question, list_questions, search_questions};
pub use quizzes::play_quiz;
