use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::domain::RepositoryError;
use crate::domain::covers::CoverError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    InvalidInput(String),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound,
        }
    }
}

impl From<CoverError> for AppError {
    fn from(err: CoverError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

/// Map an application error onto a bare status code for HTML handlers.
pub(crate) fn map_app_error(err: AppError) -> StatusCode {
    if let AppError::Unexpected(message) = &err {
        error!(error = %message, "request failed");
    }
    err.status_code()
}

/// JSON error response for API handlers.
#[derive(Debug)]
pub struct ApiError(AppError);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        Self(err.into())
    }
}

impl From<CoverError> for ApiError {
    fn from(err: CoverError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let message = match &self.0 {
            AppError::Unexpected(message) => {
                error!(error = %message, "api request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
