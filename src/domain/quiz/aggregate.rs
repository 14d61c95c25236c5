//! Quiz aggregate entity.
//!
//! A quiz is the unit of persistence: the whole document is read, mutated in
//! memory and rewritten as a whole. Questions and their options are owned
//! exclusively by their parent quiz and are never shared across quizzes.
//!
//! # Invariants
//!
//! - `title` is non-empty
//! - Question ids are assigned once and never reused
//! - A question carries `options` iff its kind is not [`QuestionKind::Text`]
//! - For persisted questions, single-choice has exactly one correct option
//!   and multiple-choice has at least one (enforced by the validator at
//!   write time, not re-checked on read)

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, QuestionId, QuizId};

use super::errors::QuizError;
use super::payload::QuestionPayload;

/// Kind of a question, controlling how submitted answers are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option is correct; a submission must select it alone.
    Single,
    /// One or more options are correct; a submission must select exactly
    /// that set.
    Multiple,
    /// Free-text answer; never auto-scored.
    Text,
}

impl QuestionKind {
    /// Whether questions of this kind count toward an evaluation total.
    pub fn is_scorable(&self) -> bool {
        !matches!(self, QuestionKind::Text)
    }
}

/// An answer option belonging to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    id: OptionId,
    text: String,
    #[serde(rename = "isCorrect")]
    is_correct: bool,
}

impl QuestionOption {
    pub fn new(id: OptionId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A question inside a quiz document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,

    text: String,

    #[serde(rename = "type")]
    kind: QuestionKind,

    /// Present iff `kind` is not `Text`; omitted entirely for free-text
    /// questions so the persisted document matches the authored shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<QuestionOption>>,
}

impl Question {
    /// Constructs a question from a validated payload, assigning fresh ids
    /// to the question and to each of its options.
    ///
    /// The caller is responsible for having run the payload through
    /// [`validate_question`](super::validate_question) first; this
    /// constructor copies the payload as-is.
    pub fn from_payload(id: QuestionId, kind: QuestionKind, payload: &QuestionPayload) -> Self {
        let options = match kind {
            QuestionKind::Text => None,
            QuestionKind::Single | QuestionKind::Multiple => Some(
                payload
                    .options()
                    .iter()
                    .map(|opt| {
                        QuestionOption::new(OptionId::generate(), opt.text.clone(), opt.is_correct)
                    })
                    .collect(),
            ),
        };

        Self {
            id,
            text: payload.text.clone(),
            kind,
            options,
        }
    }

    /// Reconstitutes a question from persisted parts.
    pub fn reconstitute(
        id: QuestionId,
        text: String,
        kind: QuestionKind,
        options: Option<Vec<QuestionOption>>,
    ) -> Self {
        Self {
            id,
            text,
            kind,
            options,
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// Returns the options as a slice, treating absence as empty.
    pub fn options(&self) -> &[QuestionOption] {
        self.options.as_deref().unwrap_or(&[])
    }
}

/// Quiz aggregate - the full persisted document for one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    id: QuizId,
    title: String,
    questions: Vec<Question>,
}

impl Quiz {
    /// Creates a new quiz with no questions.
    ///
    /// # Errors
    ///
    /// - `InvalidTitle` if the title is empty
    pub fn new(id: QuizId, title: String) -> Result<Self, QuizError> {
        if title.is_empty() {
            return Err(QuizError::InvalidTitle);
        }

        Ok(Self {
            id,
            title,
            questions: Vec::new(),
        })
    }

    pub fn id(&self) -> &QuizId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Appends a question to the end of the question sequence.
    pub fn append_question(&mut self, question: Question) {
        self.questions.push(question);
    }
}
