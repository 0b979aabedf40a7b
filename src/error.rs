use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Failures of `POST /submit`, rendered as `{"success": false, "error": ...}`.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotConfigured(String),
    Storage(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::NotConfigured(msg) => write!(f, "Not Configured: {msg}"),
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotConfigured(msg) => {
                tracing::warn!("Submission refused: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            // The form shows this text to the user, so the cause is passed through.
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, axum::Json(body)).into_response()
    }
}
