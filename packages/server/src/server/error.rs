//! JSON error responses for route handlers.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domains::quiz::QuizError;
use crate::kernel::ExtractionError;

/// Handler error rendered as `{ "error": message }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = axum::Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Malformed or mistyped request bodies are the caller's fault.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ExtractionError> for ApiError {
    fn from(error: ExtractionError) -> Self {
        match error {
            ExtractionError::InvalidUrl { .. } => {
                ApiError::BadRequest("Invalid URL format".to_string())
            }
            ExtractionError::Timeout { .. } => ApiError::Timeout(
                "Request timeout - website took too long to respond".to_string(),
            ),
            ExtractionError::FetchFailed {
                status,
                status_text,
            } => ApiError::Internal(format!(
                "Failed to fetch webpage: {} {}",
                status, status_text
            )),
            ExtractionError::InsufficientContent { .. } => ApiError::Internal(
                "Unable to extract meaningful content from the webpage".to_string(),
            ),
            ExtractionError::Network(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<QuizError> for ApiError {
    fn from(error: QuizError) -> Self {
        match error {
            QuizError::InvalidCompany(message) => ApiError::BadRequest(message),
            QuizError::Extraction(e) => e.into(),
            QuizError::AI(message) => ApiError::Internal(message),
            QuizError::Parse(e) => ApiError::Internal(e.to_string()),
        }
    }
}
