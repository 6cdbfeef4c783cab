use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, QuestionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// One page of questions plus the size of the set it was cut from.
#[derive(Debug, Clone, Default)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: u64,
}
