//! Extraction types
//!
//! The structured multiple-choice question returned to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stem placeholder when every recognized line is an option line
pub const QUESTION_NOT_FOUND: &str = "Question not found";

/// Answer placeholder when no answer pattern matched
pub const UNKNOWN_ANSWER: &str = "Unknown";

/// Option text placeholder when the matched letter has no parsed option
pub const OPTION_NOT_FOUND: &str = "Not found";

/// Option letter (`"A"`..`"D"`) to option text, ordered by letter
pub type OptionMap = BTreeMap<String, String>;

/// Question stem and options recovered from the question screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub stem: String,
    pub options: OptionMap,
}

/// Result of one `/api/process` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Question stem
    pub question: String,
    /// Lettered options
    pub options: OptionMap,
    /// `"<Letter>. <text>"`, `"<Letter>. Not found"` or `"Unknown"`
    pub correct_answer: String,
}
