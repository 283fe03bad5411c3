//! Storage backend trait for the trivia service
//!
//! [`TriviaStore`] is the find-all / find-by-id / find-by-filter / insert /
//! delete interface the service is written against. [`SqliteStore`] is the
//! production backend and delegates to the repositories.

use async_trait::async_trait;

use crate::db::{
    connection::DatabaseConnection,
    error::DbResult,
    models::{Category, NewQuestion, Question},
    repositories::{CategoryRepository, QuestionRepository},
};

/// Query and command interface over the `questions` and `categories` tables
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id
    async fn categories(&self) -> DbResult<Vec<Category>>;

    /// One category, if it exists
    async fn category(&self, id: i64) -> DbResult<Option<Category>>;

    /// All questions, ordered by id
    async fn questions(&self) -> DbResult<Vec<Question>>;

    /// One question, if it exists
    async fn question(&self, id: i64) -> DbResult<Option<Question>>;

    /// Questions whose category equals `category`, ordered by id
    async fn questions_in_category(&self, category: i64) -> DbResult<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case, ordered by id
    async fn search_questions(&self, term: &str) -> DbResult<Vec<Question>>;

    /// Insert a question and return it with its store-generated id
    async fn insert_question(&self, new: &NewQuestion) -> DbResult<Question>;

    /// Delete a question; `false` if no row had that id
    async fn delete_question(&self, id: i64) -> DbResult<bool>;

    /// Check that the store is reachable
    async fn health_check(&self) -> DbResult<()>;
}

/// [`TriviaStore`] backed by the SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    db: DatabaseConnection,
}

impl SqliteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl TriviaStore for SqliteStore {
    async fn categories(&self) -> DbResult<Vec<Category>> {
        Ok(CategoryRepository::list(self.db.pool()).await?)
    }

    async fn category(&self, id: i64) -> DbResult<Option<Category>> {
        Ok(CategoryRepository::get_by_id(self.db.pool(), id).await?)
    }

    async fn questions(&self) -> DbResult<Vec<Question>> {
        Ok(QuestionRepository::list(self.db.pool()).await?)
    }

    async fn question(&self, id: i64) -> DbResult<Option<Question>> {
        Ok(QuestionRepository::get_by_id(self.db.pool(), id).await?)
    }

    async fn questions_in_category(&self, category: i64) -> DbResult<Vec<Question>> {
        Ok(QuestionRepository::list_by_category(self.db.pool(), category).await?)
    }

    async fn search_questions(&self, term: &str) -> DbResult<Vec<Question>> {
        Ok(QuestionRepository::search(self.db.pool(), term).await?)
    }

    async fn insert_question(&self, new: &NewQuestion) -> DbResult<Question> {
        Ok(QuestionRepository::create(self.db.pool(), new).await?)
    }

    async fn delete_question(&self, id: i64) -> DbResult<bool> {
        let deleted = QuestionRepository::delete(self.db.pool(), id).await?;
        Ok(deleted > 0)
    }

    async fn health_check(&self) -> DbResult<()> {
        Ok(self.db.health_check().await?)
    }
}
