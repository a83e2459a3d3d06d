use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::advisory::validation::{FieldError, ValidationError};
use crate::advisory::{AdviceGenerationError, AnalysisGenerationError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    #[error(transparent)]
    Advice(#[from] AdviceGenerationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisGenerationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields: Option<&[FieldError]> = None;

        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidInput(e) => {
                fields = Some(e.errors.as_slice());
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Invalid input data".to_string(),
                )
            }
            // Generation failures are logged by the handler with the endpoint attached.
            AppError::Advice(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ADVICE_GENERATION_ERROR",
                e.to_string(),
            ),
            AppError::Analysis(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ANALYSIS_GENERATION_ERROR",
                e.to_string(),
            ),
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(fields) = fields {
            error["fields"] = json!(fields);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
