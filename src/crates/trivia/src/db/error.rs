//! Database error types and handling
//!
//! Provides the error type for store operations with conversion from sqlx
//! errors. Every variant surfaces to clients the same way, so the split only
//! serves the logs.

use thiserror::Error;

/// Custom database error type
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Database could not be opened or reached
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// Pool timed out or was closed
    #[error("Connection pool error: {0}")]
    PoolError(String),

    /// Row did not match the model it was read into
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Statement rejected by SQLite
    #[error("Query error: {0}")]
    QueryError(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Other(String),
}

/// Result type for database operations
pub type DbResult<T> = std::result::Result<T, DatabaseError>;

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnNotFound(col) => {
                DatabaseError::DecodeError(format!("Column not found: {}", col))
            }
            sqlx::Error::ColumnDecode { index, source } => {
                DatabaseError::DecodeError(format!("Error decoding column {}: {}", index, source))
            }
            sqlx::Error::Decode(source) => DatabaseError::DecodeError(source.to_string()),
            sqlx::Error::Database(db_err) => DatabaseError::QueryError(db_err.message().to_string()),
            sqlx::Error::RowNotFound => {
                DatabaseError::QueryError("Statement returned no rows".to_string())
            }
            sqlx::Error::Configuration(msg) => {
                DatabaseError::ConnectionError(format!("Configuration error: {}", msg))
            }
            sqlx::Error::Io(err) => DatabaseError::ConnectionError(format!("IO error: {}", err)),
            sqlx::Error::PoolTimedOut => {
                DatabaseError::PoolError("Connection pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => {
                DatabaseError::PoolError("Connection pool is closed".to_string())
            }
            err => DatabaseError::Other(err.to_string()),
        }
    }
}
