use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizforgeError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Too many files: {count} uploaded, the batch limit is {max}")]
    BatchTooLarge { count: usize, max: usize },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("LLM rate limit exceeded, retry after {retry_after:?} seconds")]
    LlmRateLimit { retry_after: Option<u64> },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for QuizforgeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            QuizforgeError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            QuizforgeError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            QuizforgeError::BatchTooLarge { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            QuizforgeError::Processing(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            QuizforgeError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
            QuizforgeError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            QuizforgeError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            QuizforgeError::Llm(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            QuizforgeError::LlmUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            QuizforgeError::LlmRateLimit { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                format!("LLM rate limit exceeded, retry after {retry_after:?} seconds"),
            ),
            QuizforgeError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, QuizforgeError>;
