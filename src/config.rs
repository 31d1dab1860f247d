//! Configuration management for MCQ Extract Server

use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::ocr::{OcrServiceConfig, DEFAULT_CHAR_WHITELIST, DEFAULT_LANGUAGE};
use crate::upload::DEFAULT_MAX_UPLOAD_BYTES;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Directory for temporary screenshots
    pub dir: PathBuf,
    /// Request body cap for `/api/process`
    pub max_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub tesseract_cmd: String,
    pub language: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            upload: UploadConfig {
                dir: PathBuf::from("./uploads"),
                max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            ocr: OcrConfig {
                tesseract_cmd: "tesseract".to_string(),
                language: DEFAULT_LANGUAGE.to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable source; unset variables take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_number(&lookup, "SERVER_PORT", defaults.server.port)?,
            },
            upload: UploadConfig {
                dir: lookup("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.upload.dir),
                max_bytes: parse_number(&lookup, "MAX_UPLOAD_BYTES", defaults.upload.max_bytes)?,
            },
            ocr: OcrConfig {
                tesseract_cmd: lookup("TESSERACT_CMD").unwrap_or(defaults.ocr.tesseract_cmd),
                language: lookup("OCR_LANGUAGE").unwrap_or(defaults.ocr.language),
            },
        })
    }

    /// OCR settings with the fixed character whitelist
    pub fn ocr_service_config(&self) -> OcrServiceConfig {
        OcrServiceConfig {
            tesseract_cmd: self.ocr.tesseract_cmd.clone(),
            language: self.ocr.language.clone(),
            char_whitelist: DEFAULT_CHAR_WHITELIST.to_string(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        None => Ok(default),
    }
}
