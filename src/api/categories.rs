use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    ApiError, ApiResponse, AppState, CategoriesData, CategoryQuestionsData, NoCategoriesBody,
    PageQuery, QuestionDto,
};
use super::page_from;
use crate::domain::CategoryId;

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let categories = state.trivia().list_categories().await?;

    if categories.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(NoCategoriesBody::default())).into_response());
    }

    Ok(Json(ApiResponse::success(CategoriesData { categories })).into_response())
}

pub async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<CategoryQuestionsData>>, ApiError> {
    let Path(id) = path?;
    let page = page_from(query);

    let result = state
        .trivia()
        .questions_in_category(CategoryId::new(id), page)
        .await?;

    Ok(Json(ApiResponse::success(CategoryQuestionsData {
        questions: result.page.questions.into_iter().map(QuestionDto::from).collect(),
        total_questions: result.page.total,
        current_category: result.current_category,
    })))
}
