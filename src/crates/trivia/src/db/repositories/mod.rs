//! Repository pattern implementations for database access
//!
//! One repository struct per table. Each method issues a single statement
//! against the pool.

pub mod category_repo;
pub mod question_repo;

pub use category_repo::CategoryRepository;
pub use question_repo::QuestionRepository;
