//! OCR Module
//!
//! Text extraction from uploaded screenshots.
//!
//! The engine is an injected [`OcrProviderTrait`] so tests can substitute a
//! fake; production uses the `tesseract` executable.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mcq_extract_server::ocr::{OcrService, OcrServiceConfig};
//!
//! let service = OcrService::new(OcrServiceConfig::default());
//! let text = service.extract_text(Path::new("uploads/question.png")).await?;
//! ```

mod provider;
mod service;
mod types;

pub use provider::{OcrProviderTrait, TesseractProvider};
pub use service::{normalize_ocr_text, OcrService, OcrServiceConfig};
pub use types::{OcrError, OcrResult, RecognizeOptions, DEFAULT_CHAR_WHITELIST, DEFAULT_LANGUAGE};

#[cfg(test)]
pub(crate) use provider::MockProvider;
