//! Domain error types.
//!
//! Input errors are produced by the bounded-integer prompt and, apart from
//! `EndOfInput`, never escape the re-prompt loop. Question errors guard the
//! two-step MCQ setup.

use thiserror::Error;

/// Errors from reading and validating a single line of console input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line was not an integer.
    #[error("not an integer: {0:?}")]
    Unparseable(String),

    /// The integer fell outside the inclusive range.
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },

    /// The input stream closed before a line was read.
    #[error("input ended before a response was given")]
    EndOfInput,
}

impl InputError {
    /// Returns `true` if the prompt should be shown again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InputError::Unparseable(_) | InputError::OutOfRange { .. }
        )
    }
}

/// Errors from setting up or using a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// `ask` or `correct_answer` was called before `set_choices`.
    #[error("choices have not been set")]
    ChoicesNotSet,

    /// Choices were set but the correct answer was not.
    #[error("correct answer has not been set")]
    CorrectAnswerNotSet,

    /// The wrong number of choices was supplied.
    #[error("expected {expected} choices, got {actual}")]
    WrongChoiceCount { expected: usize, actual: usize },

    /// The correct-answer index does not point at a choice.
    #[error("correct answer index {index} is out of range for {len} choices")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}
