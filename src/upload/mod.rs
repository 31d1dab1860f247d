//! Image intake
//!
//! Multipart screenshots are buffered, then written to the uploads directory
//! for the OCR engine and removed once the request is answered.

pub mod store;
pub mod types;

pub use store::{stored_file_name, UploadStore};
pub use types::*;
