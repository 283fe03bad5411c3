//! Category model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A question category as stored in the `categories` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Store-generated identifier
    pub id: i64,

    /// Display label, stored in the `type` column
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
