use axum::{Json, http::Uri};

use super::{ApiError, ApiResponse, Empty};

pub async fn home() -> Json<ApiResponse<Empty>> {
    Json(ApiResponse::success(Empty {}))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("Route", uri.path())
}
