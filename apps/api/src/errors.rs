use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a single `{"error": "<message>"}` object.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume and job description are both required")]
    MissingFields,

    #[error("Invalid file type. Only PDF allowed.")]
    InvalidFileType,

    #[error("File too large. Max size is 16MB.")]
    PayloadTooLarge,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("No readable text found in resume PDF")]
    NoReadableText,

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("AI generation failed: {0}")]
    Generation(#[from] LlmError),
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::MalformedRequest(err.body_text())
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::InvalidFileType
            | AppError::MalformedRequest(_)
            | AppError::NoReadableText => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage(_) | AppError::Extraction(_) | AppError::Generation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MalformedRequest(msg) => msg.clone(),
            AppError::Storage(e) => {
                tracing::error!("File saving failed: {e}");
                "Failed to save file".to_string()
            }
            AppError::Extraction(e) => {
                tracing::error!("PDF extraction failed: {e}");
                "Failed to extract text from PDF".to_string()
            }
            AppError::Generation(e) => {
                tracing::error!("Gemini generation failed: {e}");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
