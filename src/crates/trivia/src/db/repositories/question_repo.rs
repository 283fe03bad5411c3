//! Question repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::{NewQuestion, Question};

/// Question repository for managing question database operations
pub struct QuestionRepository;

impl QuestionRepository {
    /// Insert a new question and return the stored row
    pub async fn create(pool: &DatabasePool, new: &NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(pool)
        .await
    }

    /// Get a question by ID
    ///
    /// # Returns
    /// Question if found, None if not found, or database error
    pub async fn get_by_id(pool: &DatabasePool, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>("SELECT * FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all questions ordered by ascending id
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>("SELECT * FROM questions ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// List the questions of one category, ordered by ascending id
    pub async fn list_by_category(
        pool: &DatabasePool,
        category: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT * FROM questions WHERE category = ? ORDER BY id ASC",
        )
        .bind(category)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring search over the question text
    ///
    /// Case folding is Unicode-aware, so "MUSÉE" finds "Musée". The term is
    /// matched literally, with no wildcards.
    pub async fn search(pool: &DatabasePool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let questions = Self::list(pool).await?;

        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    /// Delete a question
    ///
    /// # Returns
    /// Number of deleted rows (0 or 1)
    pub async fn delete(pool: &DatabasePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Count total questions
    pub async fn count(pool: &DatabasePool) -> Result<i64, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;

        Ok(result.0)
    }
}
