//! Question Parser
//!
//! Separates the question stem from lettered options in OCR text of the
//! question screenshot.
//!
//! ```text
//! Which city is the capital of France?   <- stem (first non-option line)
//! A. London                              <- option lines: ^[A-D]\.
//! B. Rome
//! C. Paris
//! D. Berlin
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::types::{OptionMap, ParsedQuestion, QUESTION_NOT_FOUND};

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-D]\.").expect("option line pattern"));

/// Whether a trimmed line starts with an option letter and a dot
pub fn is_option_line(line: &str) -> bool {
    OPTION_LINE.is_match(line)
}

/// Split an option line into its uppercased letter and text
///
/// Only the first dot separates; dots inside the option text are kept.
pub fn split_option_line(line: &str) -> Option<(String, String)> {
    if !is_option_line(line) {
        return None;
    }
    let (key, text) = line.split_once('.')?;
    Some((key.trim().to_uppercase(), text.trim().to_string()))
}

/// Parse OCR text of a question screenshot
pub fn parse_question(text: &str) -> ParsedQuestion {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut options = OptionMap::new();
    for (letter, option_text) in lines.iter().filter_map(|line| split_option_line(line)) {
        // Repeated letters are usually OCR noise; the later line wins.
        if let Some(previous) = options.insert(letter.clone(), option_text) {
            tracing::debug!(
                letter = %letter,
                previous = %previous,
                "Duplicate option letter, keeping the later line"
            );
        }
    }

    let stem = lines
        .iter()
        .find(|line| !is_option_line(line))
        .map(|line| line.to_string())
        .unwrap_or_else(|| QUESTION_NOT_FOUND.to_string());

    ParsedQuestion { stem, options }
}
