//! Trivia service
//!
//! Holds the store handle and implements every endpoint's semantics. The
//! axum handlers only extract input and wrap the result in the envelope.

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::models::category::category_map;
use crate::api::models::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, CreatedResponse,
    DeletedResponse, QuestionPageResponse, QuestionResponse, QuizRequest, QuizResponse,
    SearchResponse,
};
use crate::db::models::Question;
use crate::db::{DbResult, TriviaStore};
use crate::services::pagination::paginate;
use crate::services::quiz::{select_unseen, CandidatePool};

/// Trivia service, constructed once at startup and shared by all handlers
#[derive(Clone)]
pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
}

impl TriviaService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Id → type mapping of every category
    ///
    /// An empty category table is reported as not found.
    pub async fn list_categories(&self) -> ApiResult<CategoriesResponse> {
        let categories = category_map(self.store.categories().await?);
        if categories.is_empty() {
            return Err(ApiError::NotFound("no categories".to_string()));
        }

        Ok(CategoriesResponse { categories })
    }

    /// One page of all questions plus the category mapping
    pub async fn list_questions(&self, page: u32) -> ApiResult<QuestionPageResponse> {
        let questions = self.store.questions().await?;
        let total_questions = questions.len();
        let current = page_of(questions, page);
        if current.is_empty() {
            return Err(ApiError::NotFound(format!("page {} has no questions", page)));
        }

        let categories = category_map(self.store.categories().await?);

        Ok(QuestionPageResponse {
            questions: current,
            total_questions,
            categories,
            current_category: None,
        })
    }

    /// Delete a question and return the refreshed first page
    pub async fn delete_question(&self, id: i64) -> ApiResult<DeletedResponse> {
        if self.store.question(id).await?.is_none() {
            return Err(ApiError::NotFound(format!("question {}", id)));
        }

        if !self.store.delete_question(id).await? {
            return Err(ApiError::NotFound(format!("question {} vanished before delete", id)));
        }
        tracing::info!("Deleted question: {}", id);

        let questions = self.store.questions().await?;
        let total_questions = questions.len();

        Ok(DeletedResponse {
            deleted: id,
            questions: page_of(questions, 1),
            total_questions,
        })
    }

    /// Insert a question and return the refreshed first page
    ///
    /// Any store failure on this path is reported as unprocessable.
    pub async fn create_question(&self, req: CreateQuestionRequest) -> ApiResult<CreatedResponse> {
        let created = self
            .store
            .insert_question(&req.into_new_question())
            .await
            .map_err(unprocessable)?;
        tracing::info!("Created question: {}", created.id);

        let questions = self.store.questions().await.map_err(unprocessable)?;
        let total_questions = questions.len();

        Ok(CreatedResponse {
            created: created.id,
            questions: page_of(questions, 1),
            total_questions,
        })
    }

    /// Questions whose text contains `term`, ignoring case
    pub async fn search_questions(&self, term: &str, page: u32) -> ApiResult<SearchResponse> {
        let questions = self.store.search_questions(term).await?;
        if questions.is_empty() {
            return Err(ApiError::NotFound(format!("no question matches {:?}", term)));
        }

        let total_questions = questions.len();
        Ok(SearchResponse {
            questions: page_of(questions, page),
            total_questions,
            current_category: None,
        })
    }

    /// Questions of one category
    pub async fn questions_in_category(
        &self,
        id: i64,
        page: u32,
    ) -> ApiResult<CategoryQuestionsResponse> {
        let category = self
            .store
            .category(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("category {}", id)))?;

        let questions = self.store.questions_in_category(category.id).await?;
        let total_questions = questions.len();

        Ok(CategoryQuestionsResponse {
            questions: page_of(questions, page),
            total_questions,
            current_category: category.kind,
        })
    }

    /// Random question of the chosen category that was not asked yet
    pub async fn play_quiz(&self, req: QuizRequest) -> ApiResult<QuizResponse> {
        let pool = CandidatePool::from_category_id(req.quiz_category.id);
        let candidates = self.candidates(pool).await?;
        let candidate_count = candidates.len();

        let question = select_unseen(candidates, &req.previous_questions, &mut rand::thread_rng())
            .ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "no questions remaining in {:?} ({} candidates, {} already asked)",
                    pool,
                    candidate_count,
                    req.previous_questions.len()
                ))
            })?;

        Ok(QuizResponse {
            question: QuestionResponse::from_db_question(question),
            previous_question: req.previous_questions,
        })
    }

    /// Check that the store is reachable
    pub async fn health(&self) -> DbResult<()> {
        self.store.health_check().await
    }

    async fn candidates(&self, pool: CandidatePool) -> DbResult<Vec<Question>> {
        match pool {
            CandidatePool::All => self.store.questions().await,
            CandidatePool::Category(id) => self.store.questions_in_category(id).await,
        }
    }
}

fn page_of(questions: Vec<Question>, page: u32) -> Vec<QuestionResponse> {
    paginate(questions, page)
        .into_iter()
        .map(QuestionResponse::from_db_question)
        .collect()
}

fn unprocessable(err: crate::db::DatabaseError) -> ApiError {
    ApiError::UnprocessableEntity(err.to_string())
}
