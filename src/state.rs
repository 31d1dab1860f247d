//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::OcrService;
use crate::upload::UploadStore;

/// Shared application state
///
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    ocr: OcrService,
    uploads: UploadStore,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config, ocr: OcrService) -> Self {
        let uploads = UploadStore::new(config.upload.dir.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                ocr,
                uploads,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the OCR service
    pub fn ocr(&self) -> &OcrService {
        &self.inner.ocr
    }

    /// Get the upload store
    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }
}
