//! Answer Matcher
//!
//! Finds the marked option in OCR text of the answer screenshot.
//!
//! OCR output is noisy: check marks come back as `√`, `*`, a lone `V` or `Y`,
//! or a word such as "selected". The text is first normalized so every mark
//! variant becomes `✓`, then an ordered list of patterns is tried and the
//! first one that matches anywhere in the text decides the letter.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{OptionMap, OPTION_NOT_FOUND, UNKNOWN_ANSWER};

/// Canonical check mark
pub const CHECK_MARK: char = '✓';

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

static MARK_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CHECK|SELECTED|TICK|MARKED").expect("mark word pattern"));

static MARK_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[VY]\b").expect("mark letter pattern"));

/// A named answer pattern; capture group 1 is the option letter
pub struct AnswerPattern {
    pub name: &'static str,
    regex: Regex,
}

impl AnswerPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("answer pattern"),
        }
    }

    /// Letter captured by the leftmost match, if any
    pub fn capture_letter(&self, text: &str) -> Option<char> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
    }
}

/// Patterns in decreasing specificity
static ANSWER_PATTERNS: LazyLock<Vec<AnswerPattern>> = LazyLock::new(|| {
    vec![
        // "C. PARIS ✓"
        AnswerPattern::new("letter_text_mark", r"([A-D])[.)]?\s?[A-Z\s]*[✓✔]"),
        // "C ✓"
        AnswerPattern::new("letter_mark", r"([A-D])[.)]?\s?[✓✔]"),
        // "CORRECT: C"
        AnswerPattern::new("correct_label", r"CORRECT\s*[:\-]?\s*([A-D])"),
        // "ANSWER - C"
        AnswerPattern::new("answer_label", r"ANSWER\s*[:\-]?\s*([A-D])"),
    ]
});

/// The ordered pattern chain
pub fn answer_patterns() -> &'static [AnswerPattern] {
    &ANSWER_PATTERNS
}

/// Letter found in the answer text and the pattern that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerMatch {
    pub letter: char,
    pub pattern: &'static str,
}

/// Collapse whitespace, uppercase, and fold every mark variant into `✓`
///
/// Applying this twice gives the same text as applying it once.
pub fn normalize_answer_text(raw: &str) -> String {
    let collapsed = WHITESPACE.replace_all(raw, " ");
    let marked = collapsed.replace(['√', '*'], "✓").to_uppercase();

    let mark = CHECK_MARK.to_string();
    // Words go before lone letters so a second pass is a no-op; the order
    // cannot change which letter the pattern chain resolves
    let words = MARK_WORDS.replace_all(&marked, mark.as_str());
    MARK_LETTERS.replace_all(&words, mark.as_str()).into_owned()
}

/// Run the pattern chain over normalized text, first match wins
pub fn match_answer(normalized: &str) -> Option<AnswerMatch> {
    answer_patterns().iter().find_map(|pattern| {
        pattern.capture_letter(normalized).map(|letter| AnswerMatch {
            letter,
            pattern: pattern.name,
        })
    })
}

/// Resolve the correct answer from raw OCR text of the answer screenshot
///
/// Returns `"<Letter>. <option text>"`, `"<Letter>. Not found"` when the
/// letter has no parsed option, or `"Unknown"` when nothing matched.
pub fn resolve_answer(raw: &str, options: &OptionMap) -> String {
    let normalized = normalize_answer_text(raw);
    tracing::debug!(text = %normalized, "Normalized answer text");

    let Some(found) = match_answer(&normalized) else {
        tracing::info!("No answer pattern matched");
        return UNKNOWN_ANSWER.to_string();
    };

    let option_text = options
        .get(found.letter.to_string().as_str())
        .map(String::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(OPTION_NOT_FOUND);

    tracing::info!(
        letter = %found.letter,
        pattern = found.pattern,
        option = %option_text,
        "Detected correct answer"
    );

    format!("{}. {}", found.letter, option_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> OptionMap {
        [("A", "London"), ("B", "Rome"), ("C", "Paris"), ("D", "Berlin")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn pattern(name: &str) -> &'static AnswerPattern {
        answer_patterns()
            .iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    #[test]
    fn test_letter_with_text_and_mark() {
        assert_eq!(resolve_answer("C. PARIS ✓", &capitals()), "C. Paris");
    }

    #[test]
    fn test_answer_label() {
        assert_eq!(resolve_answer("ANSWER: B", &capitals()), "B. Rome");
        assert_eq!(resolve_answer("answer - d", &capitals()), "D. Berlin");
    }

    #[test]
    fn test_correct_label() {
        assert_eq!(resolve_answer("Correct:A", &capitals()), "A. London");
    }

    #[test]
    fn test_no_pattern_is_unknown() {
        assert_eq!(resolve_answer("XYZ 123", &capitals()), UNKNOWN_ANSWER);
        assert_eq!(resolve_answer("", &capitals()), UNKNOWN_ANSWER);
    }

    #[test]
    fn test_missing_option_is_not_found() {
        let mut options = capitals();
        options.remove("D");
        assert_eq!(resolve_answer("D ✓", &options), "D. Not found");
    }

    #[test]
    fn test_empty_option_text_is_not_found() {
        let mut options = capitals();
        options.insert("B".to_string(), String::new());
        assert_eq!(resolve_answer("B ✓", &options), "B. Not found");
    }

    #[test]
    fn test_mark_variants() {
        let options = capitals();
        assert_eq!(resolve_answer("b) rome √", &options), "B. Rome");
        assert_eq!(resolve_answer("c *", &options), "C. Paris");
        assert_eq!(resolve_answer("A ✔", &options), "A. London");
        assert_eq!(resolve_answer("c. paris v", &options), "C. Paris");
        assert_eq!(resolve_answer("D. Berlin selected", &options), "D. Berlin");
    }

    #[test]
    fn test_normalize_answer_text() {
        assert_eq!(normalize_answer_text("c.\n  paris\t√"), "C. PARIS ✓");
        assert_eq!(normalize_answer_text("b y"), "B ✓");
        assert_eq!(normalize_answer_text("ticked"), "✓ED");
        // V inside a word is not a mark
        assert_eq!(normalize_answer_text("very"), "VERY");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["c. Paris *", "b √ rome", "Answer: d", "A tick v", "vcheck", "XYZ 123"] {
            let once = normalize_answer_text(raw);
            assert_eq!(normalize_answer_text(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn test_normalized_input_resolves_the_same() {
        let options = capitals();
        for raw in ["c. Paris *", "b √", "answer: a", "nothing here"] {
            let normalized = normalize_answer_text(raw);
            assert_eq!(
                resolve_answer(&normalized, &options),
                resolve_answer(raw, &options),
                "input: {raw}"
            );
        }
    }

    #[test]
    fn test_pattern_order() {
        let names: Vec<&str> = answer_patterns().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["letter_text_mark", "letter_mark", "correct_label", "answer_label"]
        );
    }

    #[test]
    fn test_first_pattern_wins_over_label() {
        // Both a marked option and an "ANSWER" label are present
        let found = match_answer("ANSWER: B ... C ✓").unwrap();
        assert_eq!(found.pattern, "letter_text_mark");
    }

    #[test]
    fn test_individual_patterns() {
        assert_eq!(pattern("letter_text_mark").capture_letter("B. ROME ✓"), Some('B'));
        assert_eq!(pattern("letter_text_mark").capture_letter("B. ROME"), None);
        assert_eq!(pattern("letter_mark").capture_letter("D)✓"), Some('D'));
        assert_eq!(pattern("letter_mark").capture_letter("D. BERLIN ✓"), None);
        assert_eq!(pattern("correct_label").capture_letter("CORRECT - C"), Some('C'));
        assert_eq!(pattern("answer_label").capture_letter("ANSWER:A"), Some('A'));
        assert_eq!(pattern("answer_label").capture_letter("ANSWER: E"), None);
    }
}
