//! Domain service for trivia questions, categories and quiz rounds.
//!
//! Handlers never touch the store directly; they call through this trait so
//! every endpoint shares the same not-found and rollback rules.

use crate::domain::{CategoryId, Page, QuestionId, QuizCategory};
use crate::models::{CategoryMap, NewQuestion, Question, QuestionPage};
use thiserror::Error;

/// Domain errors for trivia operations.
#[derive(Debug, Error)]
pub enum TriviaError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("Could not apply change: {0}")]
    Unprocessable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    pub fn question_not_found(id: QuestionId) -> Self {
        Self::NotFound(format!("Question {id} not found"))
    }
}

impl From<sea_orm::DbErr> for TriviaError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for TriviaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

/// Questions of one category together with the category's display type.
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub page: QuestionPage,
    pub current_category: String,
}

#[async_trait::async_trait]
pub trait TriviaService: Send + Sync {
    /// All categories keyed by id. An empty map is a valid result.
    async fn list_categories(&self) -> Result<CategoryMap, TriviaError>;

    /// One page of all questions ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError::NotFound`] when the page holds no questions.
    async fn list_questions(&self, page: Page) -> Result<QuestionPage, TriviaError>;

    /// One page of questions whose text contains `term`, ignoring case.
    /// The returned `total` counts the whole match set.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError::NotFound`] when nothing matches at all.
    async fn search_questions(&self, term: &str, page: Page) -> Result<QuestionPage, TriviaError>;

    /// Stores a validated question.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError::Internal`] if the insert is not committed.
    async fn create_question(&self, question: NewQuestion) -> Result<QuestionId, TriviaError>;

    /// Deletes a question.
    ///
    /// # Errors
    ///
    /// - Returns [`TriviaError::NotFound`] if the question does not exist
    /// - Returns [`TriviaError::Unprocessable`] if the delete is rolled back
    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, TriviaError>;

    /// One page of the questions filed under `category`.
    ///
    /// # Errors
    ///
    /// Returns [`TriviaError::CategoryNotFound`] if the category does not exist.
    async fn questions_in_category(
        &self,
        category: CategoryId,
        page: Page,
    ) -> Result<CategoryQuestions, TriviaError>;

    /// Picks a random question the player has not seen yet, `None` once the
    /// candidate set is exhausted.
    async fn next_quiz_question(
        &self,
        category: QuizCategory,
        previous_questions: &[QuestionId],
    ) -> Result<Option<Question>, TriviaError>;
}
