use thiserror::Error;

/// Prompt shown when the answer field does not hold a whole number.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a valid number.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,

    #[error("not a whole number: {0:?}")]
    NotAnInteger(String),
}

impl AnswerError {
    /// Text for the blocking prompt the view shows for this error.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        INVALID_NUMBER_MESSAGE
    }
}

/// Parses the raw text of the answer field.
///
/// Surrounding whitespace is ignored and a leading sign is accepted.
///
/// # Errors
///
/// Returns `AnswerError::Empty` for blank input and
/// `AnswerError::NotAnInteger` for anything `i64` cannot represent.
pub fn parse_answer(raw: &str) -> Result<i64, AnswerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnswerError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AnswerError::NotAnInteger(trimmed.to_owned()))
}
