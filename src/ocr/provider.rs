//! OCR Providers
//!
//! Defines the provider trait and the Tesseract implementation.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::types::{OcrError, OcrResult, RecognizeOptions};

/// OCR provider trait
#[async_trait]
pub trait OcrProviderTrait: Send + Sync {
    /// Short provider name used in logs and health output
    fn name(&self) -> &'static str;

    /// Check if the provider is available
    async fn is_available(&self) -> bool;

    /// Perform OCR on an image file
    async fn recognize(
        &self,
        image_path: &Path,
        options: &RecognizeOptions,
    ) -> Result<OcrResult, OcrError>;
}

/// Tesseract OCR provider, driving the `tesseract` executable
pub struct TesseractProvider {
    /// Executable name or path
    command: String,
}

impl TesseractProvider {
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }
}

impl Default for TesseractProvider {
    fn default() -> Self {
        Self::new("tesseract")
    }
}

#[async_trait]
impl OcrProviderTrait for TesseractProvider {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    async fn is_available(&self) -> bool {
        Command::new(&self.command)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }

    async fn recognize(
        &self,
        image_path: &Path,
        options: &RecognizeOptions,
    ) -> Result<OcrResult, OcrError> {
        // Reject non-images before paying for a tesseract process
        let probe_path = image_path.to_path_buf();
        let (width, height) = tokio::task::spawn_blocking(move || {
            image::ImageReader::open(&probe_path)?
                .with_guessed_format()?
                .into_dimensions()
        })
        .await
        .map_err(|e| OcrError::ProcessingError(format!("Image probe task failed: {}", e)))?
        .map_err(|e| OcrError::UnsupportedImage(format!("{}: {}", image_path.display(), e)))?;

        tracing::debug!(
            path = %image_path.display(),
            width,
            height,
            language = %options.language,
            "Running tesseract"
        );

        // Killed if the request is dropped mid-recognition
        let mut command = Command::new(&self.command);
        command
            .kill_on_drop(true)
            .arg(image_path)
            .arg("stdout")
            .arg("-l")
            .arg(&options.language);
        if !options.char_whitelist.is_empty() {
            command
                .arg("-c")
                .arg(format!("tessedit_char_whitelist={}", options.char_whitelist));
        }

        let output = command.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OcrError::ProviderNotAvailable(format!("'{}' not found", self.command))
            } else {
                OcrError::Io(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessingError(format!(
                "Tesseract failed: {}",
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        tracing::debug!(
            path = %image_path.display(),
            chars = text.chars().count(),
            "Tesseract finished"
        );

        Ok(OcrResult {
            text,
            provider: self.name(),
        })
    }
}

/// Mock provider for testing
///
/// Answers with the text registered for the first key the image file name
/// ends with.
#[cfg(test)]
pub struct MockProvider {
    pub responses: Vec<(String, String)>,
    pub available: bool,
    pub fail: bool,
    pub seen: std::sync::Mutex<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl MockProvider {
    pub fn with_responses(responses: &[(&str, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            available: true,
            fail: false,
            seen: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_responses(&[])
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::with_responses(&[])
        }
    }

    pub fn seen_paths(&self) -> Vec<std::path::PathBuf> {
        self.seen.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl OcrProviderTrait for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn recognize(
        &self,
        image_path: &Path,
        _options: &RecognizeOptions,
    ) -> Result<OcrResult, OcrError> {
        self.seen.lock().unwrap().push(image_path.to_path_buf());

        if self.fail {
            return Err(OcrError::ProcessingError("mock failure".to_string()));
        }

        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = self
            .responses
            .iter()
            .find(|(key, _)| file_name.ends_with(key.as_str()))
            .map(|(_, text)| text.clone())
            .unwrap_or_default();

        Ok(OcrResult {
            text,
            provider: self.name(),
        })
    }
}
