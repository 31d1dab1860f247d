//! MCQ Extract Server Library
//!
//! The server binary is in main.rs; everything it wires together lives here
//! so tests and benchmarks can reach it.
//!
//! # Modules
//!
//! - `extraction`: question/option parser and answer pattern matcher
//! - `ocr`: text extraction through an injectable OCR provider
//! - `upload`: temporary storage for uploaded screenshots
//! - `routes`: HTTP endpoints and the upload page

pub mod config;
pub mod error;
pub mod extraction;
pub mod ocr;
pub mod routes;
pub mod state;
pub mod upload;
