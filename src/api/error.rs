use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::TriviaError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),

    NotFound(String),

    Unprocessable(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Details stay in the log.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request",
            ApiError::NotFound(_) => "resource not found",
            ApiError::Unprocessable(_) => "unprocessable",
            ApiError::DatabaseError(_) | ApiError::InternalError(_) => {
                "an unexpected error occured, request could not be processed"
            }
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} {} not found", resource, id))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            ApiError::InternalError(msg) => tracing::error!("Internal error: {}", msg),
            ApiError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => {
                tracing::debug!("{}: {}", status, msg);
            }
        }

        let body = ErrorBody::new(status, self.public_message());
        (status, Json(body)).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        match err {
            TriviaError::NotFound(msg) => ApiError::NotFound(msg),
            TriviaError::CategoryNotFound(id) => {
                ApiError::BadRequest(format!("Category {id} does not exist"))
            }
            TriviaError::Unprocessable(msg) => ApiError::Unprocessable(msg),
            TriviaError::Database(msg) => ApiError::DatabaseError(msg),
            TriviaError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(format!("{err:#}"))
    }
}

/// A body that cannot be read as JSON is a server-side parse failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InternalError(format!("Unreadable request body: {}", rejection.body_text()))
    }
}

/// Non-integer ids never match a route.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;

    #[test]
    fn statuses_follow_error_taxonomy() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("Question", 3).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unprocessable("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::DatabaseError("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unknown_category_maps_to_bad_request() {
        let err: ApiError = TriviaError::CategoryNotFound(CategoryId::new(9)).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "bad request");
    }

    #[test]
    fn internal_details_are_not_public() {
        let err = ApiError::internal("connection reset by peer");
        assert!(!err.public_message().contains("connection"));
    }
}
