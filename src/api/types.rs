use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, Page, QuestionId};
use crate::models::{CategoryMap, NewQuestion, Question};

/// Success envelope: `success: true` next to the payload's own fields.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.into(),
        }
    }
}

/// 404 body of `GET /categories` on an empty table. Keeps the historical
/// `categories` string next to the usual error fields.
#[derive(Debug, Serialize)]
pub struct NoCategoriesBody {
    #[serde(flatten)]
    pub error: ErrorBody,
    pub categories: &'static str,
}

impl Default for NoCategoriesBody {
    fn default() -> Self {
        Self {
            error: ErrorBody::new(StatusCode::NOT_FOUND, "resource not found"),
            categories: "no categories found",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDto {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

/// Query-string pairs as sent. Repeated keys are kept, so reading them never
/// fails.
#[derive(Debug, Deserialize, Default)]
#[serde(transparent)]
pub struct PageQuery(Vec<(String, String)>);

impl PageQuery {
    /// First `page` value, read leniently.
    #[must_use]
    pub fn page(&self) -> Page {
        let raw = self
            .0
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());
        Page::parse(raw)
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesData {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionListData {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct SearchData {
    pub questions: Vec<QuestionDto>,
    /// Number of questions on this page, not the whole match set.
    pub total_questions: usize,
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionData {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl From<NewQuestion> for CreatedQuestionData {
    fn from(q: NewQuestion) -> Self {
        Self {
            question: q.question,
            answer: q.answer,
            difficulty: q.difficulty,
            category: q.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedData {
    pub deleted: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsData {
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct QuizData {
    /// `None` once every candidate has been played.
    pub question: Option<QuestionDto>,
    /// The requested category id exactly as the client sent it.
    pub category: serde_json::Value,
}
