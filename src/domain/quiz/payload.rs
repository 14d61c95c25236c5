//! Raw question payloads as submitted by quiz authors.
//!
//! A payload is plain boundary data: the question type arrives as a string
//! and nothing about it has been checked yet. Payloads only become domain
//! [`Question`](super::Question)s after passing
//! [`validate_question`](super::validate_question).

/// An answer option as submitted by an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionPayload {
    pub text: String,
    pub is_correct: bool,
}

/// A question as submitted by an author, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPayload {
    /// Question prompt text.
    pub text: String,
    /// Declared question type ("single", "multiple" or "text").
    pub question_type: String,
    /// Answer options; expected to be absent for free-text questions.
    pub options: Option<Vec<OptionPayload>>,
}

impl QuestionPayload {
    /// Returns the options as a slice, treating absence as empty.
    pub fn options(&self) -> &[OptionPayload] {
        self.options.as_deref().unwrap_or(&[])
    }
}
