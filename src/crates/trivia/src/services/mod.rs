//! Service layer for the trivia API
//!
//! [`TriviaService`] implements the endpoint semantics over a
//! [`TriviaStore`](crate::db::TriviaStore); `pagination` and `quiz` hold the
//! pure helpers it uses.

pub mod pagination;
pub mod quiz;
pub mod trivia;

pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use quiz::{select_unseen, CandidatePool};
pub use trivia::TriviaService;
