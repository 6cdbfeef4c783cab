use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, QuestionDto, QuizData};
use crate::api::validation::QuizRequest;

pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuizData>>, ApiError> {
    let Json(request) = payload?;
    let category = request.category()?;

    let question = state
        .trivia()
        .next_quiz_question(category, request.previous_questions())
        .await?;

    Ok(Json(ApiResponse::success(QuizData {
        question: question.map(QuestionDto::from),
        category: request.raw_category_id(),
    })))
}
