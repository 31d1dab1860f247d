//! Upload Store
//!
//! Temporary on-disk storage for uploaded screenshots. Files live in a single
//! process-wide directory and are named `<unix-millis>-<uuid>-<name>` so
//! concurrent requests never collide.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use super::types::{ImageUpload, UploadError, UploadedImage, DEFAULT_FILE_NAME};

/// Local directory for uploaded images
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the uploads directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Write an upload to disk
    pub async fn persist(&self, upload: &ImageUpload) -> Result<UploadedImage, UploadError> {
        let name = stored_file_name(&upload.file_name, upload.content_type.as_deref());
        let path = self.dir.join(format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            name
        ));

        tokio::fs::write(&path, &upload.data).await?;

        tracing::debug!(
            role = ?upload.role,
            path = %path.display(),
            size = upload.data.len(),
            "Stored uploaded image"
        );

        Ok(UploadedImage {
            role: upload.role,
            path,
        })
    }

    /// Delete stored images, best-effort
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn remove_all(&self, images: &[UploadedImage]) {
        for image in images {
            match tokio::fs::remove_file(&image.path).await {
                Ok(()) => tracing::debug!(path = %image.path.display(), "Removed uploaded image"),
                Err(e) => tracing::warn!(
                    path = %image.path.display(),
                    error = %e,
                    "Failed to remove uploaded image"
                ),
            }
        }
    }
}

/// Reduce a client-supplied file name to a safe single path component
///
/// Directory parts are dropped, unusual characters become `_`, and a missing
/// extension is filled in from the content type when one is known.
pub fn stored_file_name(original: &str, content_type: Option<&str>) -> String {
    let base = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    let mut name = if cleaned.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    };

    if !name.contains('.') {
        if let Some(ext) = content_type
            .and_then(mime_guess::get_mime_extensions_str)
            .and_then(|exts| exts.first())
        {
            name.push('.');
            name.push_str(ext);
        }
    }

    name
}
