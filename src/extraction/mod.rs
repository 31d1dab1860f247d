//! MCQ extraction
//!
//! Turns OCR text of a question screenshot and an answer screenshot into an
//! [`ExtractionResult`]:
//!
//! - `question`: stem and lettered options from the question text
//! - `answer`: ordered pattern chain that finds the marked option

pub mod answer;
pub mod question;
mod types;

pub use answer::{normalize_answer_text, resolve_answer, AnswerMatch, AnswerPattern};
pub use question::parse_question;
pub use types::{
    ExtractionResult, OptionMap, ParsedQuestion, OPTION_NOT_FOUND, QUESTION_NOT_FOUND,
    UNKNOWN_ANSWER,
};

/// Build the result for one question/answer screenshot pair
pub fn extract(question_text: &str, answer_text: &str) -> ExtractionResult {
    let ParsedQuestion { stem, options } = parse_question(question_text);
    let correct_answer = resolve_answer(answer_text, &options);

    ExtractionResult {
        question: stem,
        options,
        correct_answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_pair() {
        let question = "What is the capital of France?\nA. London\nB. Rome\nC. Paris\nD. Berlin";
        let answer = "A. London\nB. Rome\nC. Paris √\nD. Berlin";

        let result = extract(question, answer);
        assert_eq!(result.question, "What is the capital of France?");
        assert_eq!(result.options.len(), 4);
        assert_eq!(result.correct_answer, "C. Paris");
    }

    #[test]
    fn test_extract_unmatched_answer() {
        let result = extract("Q?\nA. yes\nB. no", "no marks at all 42");
        assert_eq!(result.correct_answer, UNKNOWN_ANSWER);
    }
}
