//! OCR Types

/// Characters Tesseract may emit: Latin letters, digits, common punctuation
/// and the check-mark symbols answer screenshots use
pub const DEFAULT_CHAR_WHITELIST: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789.,:;!?()[]{}✓✔√*- ";

/// Default Tesseract language
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Options passed to a provider for one recognition
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    /// Tesseract language code (e.g. "eng")
    pub language: String,
    /// Restrict output to these characters; empty disables the restriction
    pub char_whitelist: String,
}

impl Default for RecognizeOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
        }
    }
}

/// OCR result
#[derive(Debug, Clone)]
pub struct OcrResult {
    /// Recognized text, as emitted by the engine
    pub text: String,
    /// Provider that produced the text
    pub provider: &'static str,
}

/// OCR error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR provider not available: {0}")]
    ProviderNotAvailable(String),

    #[error("Unsupported or corrupt image: {0}")]
    UnsupportedImage(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
