//! Configuration module for the trivia server
//!
//! TOML file loading, environment overrides and validation.

pub mod server;

pub use server::{ConfigError, CorsConfig, DatabaseConfig, ServerConfig, ServerInfoConfig};
