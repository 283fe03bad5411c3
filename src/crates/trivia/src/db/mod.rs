//! Database module for the trivia service
//!
//! Provides database connectivity, models, repositories, the store trait the
//! service is written against, and error handling.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};
pub use seed::seed_defaults;
pub use store::{SqliteStore, TriviaStore};
