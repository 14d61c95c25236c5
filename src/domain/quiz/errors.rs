//! Quiz-specific error types.

use thiserror::Error;

use crate::domain::foundation::QuizId;
use crate::ports::QuizStoreError;

/// Reasons a question payload is rejected by the validator.
///
/// The variants mirror the validation rules in the order they are checked;
/// the first failing rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionRejection {
    #[error("question text must be a non-empty string of at most 300 characters")]
    InvalidText,

    #[error("question type must be one of 'single', 'multiple', 'text'")]
    InvalidType,

    #[error("text questions must not include options")]
    UnexpectedOptions,

    #[error("choice questions require at least one option")]
    MissingOptions,

    #[error("every option must include a non-empty text string")]
    InvalidOptionText,

    #[error("single choice questions must have exactly one correct option")]
    SingleChoiceCardinality,

    #[error("multiple choice questions must have at least one correct option")]
    MultipleChoiceCardinality,
}

/// Errors surfaced by quiz operations.
///
/// Expected domain conditions (unknown quiz, rejected payload, bad title)
/// are their own variants so the boundary layer can translate them; only
/// `Infrastructure` represents an unexpected storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// No quiz document exists under the given id.
    NotFound(QuizId),
    /// Quiz title is missing or empty.
    InvalidTitle,
    /// Question payload failed validation.
    Rejected(QuestionRejection),
    /// Storage failure.
    Infrastructure(String),
}

impl QuizError {
    pub fn not_found(id: QuizId) -> Self {
        QuizError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuizError::Infrastructure(message.into())
    }

    pub fn message(&self) -> String {
        match self {
            QuizError::NotFound(id) => format!("Quiz not found: {}", id),
            QuizError::InvalidTitle => "Title is required".to_string(),
            QuizError::Rejected(reason) => reason.to_string(),
            QuizError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuizError {}

impl From<QuestionRejection> for QuizError {
    fn from(reason: QuestionRejection) -> Self {
        QuizError::Rejected(reason)
    }
}

impl From<QuizStoreError> for QuizError {
    fn from(err: QuizStoreError) -> Self {
        QuizError::Infrastructure(err.to_string())
    }
}
