#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The engine itself is total over text and skill inputs; every variant here
/// comes from a collaborator (dataset store, document extractor, request layer).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Skill dataset unavailable: {0}")]
    DatasetMissing(String),

    #[error("Document extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Job role '{0}' not found in database")]
    RoleNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status and stable machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::DatasetMissing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATASET_MISSING"),
            AppError::ExtractionFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXTRACTION_FAILED")
            }
            AppError::RoleNotFound(_) => (StatusCode::NOT_FOUND, "ROLE_NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::DatasetMissing(msg) => {
                tracing::error!("Dataset error: {msg}");
                "Job skills dataset missing".to_string()
            }
            AppError::ExtractionFailure(msg) => {
                tracing::error!("Extraction error: {msg}");
                format!("Document extraction error: {msg}")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            AppError::RoleNotFound(_) | AppError::Validation(_) => self.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
