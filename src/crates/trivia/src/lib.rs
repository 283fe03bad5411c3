//! REST backend for a trivia game
//!
//! This crate serves trivia categories and questions over a JSON HTTP API:
//! paginated listing, creation, deletion, substring search, per-category
//! listing and quiz play that never repeats a question the player has seen.
//!
//! Layers, bottom-up:
//! - [`db`]: SQLite persistence through sqlx, behind the [`db::TriviaStore`] trait
//! - [`services`]: endpoint semantics, pagination and quiz selection
//! - [`api`]: axum router, handlers, the JSON envelope and error mapping
//! - [`config`]: TOML configuration with environment overrides

pub mod api;
pub mod config;
pub mod db;
pub mod services;
pub mod version;

pub use api::{create_router, ApiError, AppState};
pub use config::ServerConfig;
pub use db::{DatabaseConnection, SqliteStore, TriviaStore};
pub use services::TriviaService;
