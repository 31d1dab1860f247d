//! Upload types

use std::path::PathBuf;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Default request body cap: 20MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Fallback file name when the client sends none
pub const DEFAULT_FILE_NAME: &str = "image";

// ============================================================================
// Image Types
// ============================================================================

/// Which screenshot an upload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRole {
    Question,
    Answer,
}

impl ImageRole {
    /// Multipart field name for this role
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Question => "questionImage",
            Self::Answer => "answerImage",
        }
    }

    /// Role for a multipart field name
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "questionImage" => Some(Self::Question),
            "answerImage" => Some(Self::Answer),
            _ => None,
        }
    }
}

/// Image received in a multipart field, not yet on disk
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub role: ImageRole,
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: axum::body::Bytes,
}

/// Image persisted in the uploads directory for the lifetime of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub role: ImageRole,
    pub path: PathBuf,
}

// ============================================================================
// Errors
// ============================================================================

/// Upload error types
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Both images are required")]
    MissingImages,

    #[error("Invalid multipart upload: {0}")]
    InvalidMultipart(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),
}

impl UploadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingImages | Self::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            Self::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
