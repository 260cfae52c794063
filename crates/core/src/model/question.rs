use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of answer options a multiple-choice question must carry.
pub const MIN_OPTIONS: usize = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least {MIN_OPTIONS} options, got {0}")]
    TooFewOptions(usize),

    #[error("answer option {0} cannot be empty")]
    EmptyOption(usize),

    #[error("correct index {index} out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any option is blank, there
    /// are fewer than [`MIN_OPTIONS`] options, or `correct` does not index
    /// into the options.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions(options.len()));
        }
        if let Some(pos) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuestionError::EmptyOption(pos));
        }
        if correct >= options.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct,
                len: options.len(),
            });
        }
        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Number of answer options.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Index of the correct option.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Returns true if `index` picks the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn question_rejects_blank_prompt() {
        let err = Question::new("  ", options(&["a", "b"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn question_requires_two_options() {
        let err = Question::new("Pick one", options(&["only"]), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions(1));
    }

    #[test]
    fn question_rejects_blank_option() {
        let err = Question::new("Pick one", options(&["a", " "]), 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption(1));
    }

    #[test]
    fn correct_index_must_be_in_range() {
        let err = Question::new("Pick one", options(&["a", "b"]), 2).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn is_correct_matches_correct_index() {
        let q = Question::new("Pick one", options(&["a", "b", "c"]), 1).unwrap();
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.option_count(), 3);
    }
}
