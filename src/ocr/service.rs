//! OCR Service
//!
//! Wraps a provider with the configured language and character whitelist and
//! normalizes recognized text.

use std::path::Path;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use super::{
    provider::{OcrProviderTrait, TesseractProvider},
    types::{OcrError, RecognizeOptions, DEFAULT_CHAR_WHITELIST, DEFAULT_LANGUAGE},
};

/// OCR service configuration
#[derive(Debug, Clone)]
pub struct OcrServiceConfig {
    /// Tesseract executable
    pub tesseract_cmd: String,
    /// OCR language
    pub language: String,
    /// Allowed output characters
    pub char_whitelist: String,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: "tesseract".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
        }
    }
}

/// OCR service: image path in, NFKC-normalized text out
#[derive(Clone)]
pub struct OcrService {
    options: RecognizeOptions,
    provider: Arc<dyn OcrProviderTrait>,
}

impl OcrService {
    /// Create a service backed by the Tesseract executable
    pub fn new(config: OcrServiceConfig) -> Self {
        let provider = Arc::new(TesseractProvider::new(&config.tesseract_cmd));
        Self::with_provider(config, provider)
    }

    /// Create a service backed by any provider
    pub fn with_provider(config: OcrServiceConfig, provider: Arc<dyn OcrProviderTrait>) -> Self {
        Self {
            options: RecognizeOptions {
                language: config.language,
                char_whitelist: config.char_whitelist,
            },
            provider,
        }
    }

    /// Name of the backing provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Whether the backing provider can run
    pub async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }

    /// Recognize the text of an image file
    ///
    /// Errors from the provider are returned as-is; there is no retry.
    pub async fn extract_text(&self, image_path: &Path) -> Result<String, OcrError> {
        let result = self.provider.recognize(image_path, &self.options).await?;
        tracing::debug!(
            provider = result.provider,
            path = %image_path.display(),
            "Recognized image text"
        );
        Ok(normalize_ocr_text(&result.text))
    }
}

/// Unicode compatibility normalization (NFKC)
pub fn normalize_ocr_text(text: &str) -> String {
    text.nfkc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::provider::MockProvider;

    #[test]
    fn test_nfkc_folds_compatibility_forms() {
        // Fullwidth letters and the "fi" ligature
        assert_eq!(normalize_ocr_text("ＡＮＳＷＥＲ： ﬁve"), "ANSWER: five");
        // Check marks survive
        assert_eq!(normalize_ocr_text("C ✓ ✔ √"), "C ✓ ✔ √");
    }

    #[tokio::test]
    async fn test_extract_text_normalizes_provider_output() {
        let provider = Arc::new(MockProvider::with_responses(&[("answer.png", "Ｂ ✓")]));
        let service = OcrService::with_provider(OcrServiceConfig::default(), provider.clone());

        let text = service
            .extract_text(Path::new("/tmp/1-x-answer.png"))
            .await
            .unwrap();

        assert_eq!(text, "B ✓");
        assert_eq!(service.provider_name(), "mock");
        assert!(service.is_available().await);
    }

    #[tokio::test]
    async fn test_extract_text_propagates_failure() {
        let service = OcrService::with_provider(
            OcrServiceConfig::default(),
            Arc::new(MockProvider::failing()),
        );

        let result = service.extract_text(Path::new("/tmp/q.png")).await;
        assert!(matches!(result, Err(OcrError::ProcessingError(_))));
    }

    #[test]
    fn test_default_config() {
        let config = OcrServiceConfig::default();
        assert_eq!(config.language, "eng");
        assert!(config.char_whitelist.contains('✓'));
        assert!(config.char_whitelist.ends_with(' '));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_extract_text_runs_engine_and_normalizes() {
        use crate::ocr::provider::fake_engine::{recording_script, write_png};

        let dir = tempfile::tempdir().unwrap();
        let image = write_png(dir.path(), "q.png");
        let args_file = dir.path().join("args.txt");
        let script = recording_script(dir.path(), &args_file, "Ｃ. Ｐａｒｉｓ √");

        let service = OcrService::new(OcrServiceConfig {
            tesseract_cmd: script.to_string_lossy().into_owned(),
            ..OcrServiceConfig::default()
        });
        let text = service.extract_text(&image).await.unwrap();

        assert_eq!(text, "C. Paris √\n");
        assert_eq!(service.provider_name(), "tesseract");

        let recorded = std::fs::read_to_string(&args_file).unwrap();
        let args: Vec<&str> = recorded.lines().collect();
        assert_eq!(&args[1..4], &["stdout", "-l", "eng"]);
        assert_eq!(args[4], "-c");
        assert_eq!(
            args[5],
            format!("tessedit_char_whitelist={}", crate::ocr::DEFAULT_CHAR_WHITELIST)
        );
    }
}
