use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::{
    ApiError, ApiResponse, AppState, CreatedQuestionData, DeletedData, PageQuery, QuestionDto,
    QuestionListData, SearchData,
};
use crate::api::validation::QuestionsRequest;
use super::page_from;
use crate::domain::QuestionId;

pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionListData>>, ApiError> {
    let page = page_from(query);

    let result = state.trivia().list_questions(page).await?;
    let categories = state.trivia().list_categories().await?;

    Ok(Json(ApiResponse::success(QuestionListData {
        questions: result.questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: result.total,
        categories,
    })))
}

pub async fn search_or_create_question(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = payload?;

    match QuestionsRequest::from_json(body)? {
        QuestionsRequest::Search { search_term } => {
            let page = page_from(query);
            let result = state.trivia().search_questions(&search_term, page).await?;

            let questions: Vec<QuestionDto> =
                result.questions.into_iter().map(QuestionDto::from).collect();

            Ok(Json(ApiResponse::success(SearchData {
                total_questions: questions.len(),
                questions,
                search_term,
            }))
            .into_response())
        }
        QuestionsRequest::Create(new_question) => {
            let id = state.trivia().create_question(new_question.clone()).await?;
            info!("Created question {}", id);

            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::success(CreatedQuestionData::from(new_question))),
            )
                .into_response())
        }
    }
}

pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<(StatusCode, Json<ApiResponse<DeletedData>>), ApiError> {
    let Path(id) = path?;

    let deleted = state.trivia().delete_question(QuestionId::new(id)).await?;

    // Clients of this API expect 201 on delete.
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(DeletedData { deleted })),
    ))
}
