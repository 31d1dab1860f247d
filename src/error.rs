//! Error types for the MCQ Extract server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ocr::OcrError;
use crate::upload::UploadError;

/// Body of every 500 response; causes are logged, never returned
pub const PROCESSING_FAILED: &str = "Failed to process images.";

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upload(e) => {
                let status = e.status_code();
                let message = match e {
                    UploadError::MissingImages => e.to_string(),
                    UploadError::InvalidMultipart(_) => "Invalid multipart upload".to_string(),
                    UploadError::StorageError(_) => PROCESSING_FAILED.to_string(),
                };
                if status.is_server_error() {
                    tracing::error!("Error storing images: {}", e);
                } else {
                    tracing::warn!("Rejected upload: {}", e);
                }
                (status, message)
            }
            AppError::Ocr(e) => {
                tracing::error!("Error processing images: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED.to_string())
            }
            AppError::Serialization(e) => {
                tracing::error!("Error serializing result: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
