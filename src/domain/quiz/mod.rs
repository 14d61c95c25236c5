//! Quiz domain module.
//!
//! The quiz document is the unit of persistence: a quiz owns its questions,
//! and each question owns its answer options. Question payloads are validated
//! before they enter a document, which lets the answer evaluator assume
//! well-formed correct-answer data.

mod aggregate;
mod errors;
mod evaluator;
mod payload;
mod validator;

pub use aggregate::{Question, QuestionKind, QuestionOption, Quiz};
pub use errors::{QuestionRejection, QuizError};
pub use evaluator::{evaluate, Answer, Evaluation};
pub use payload::{OptionPayload, QuestionPayload};
pub use validator::{validate_question, MAX_QUESTION_TEXT_LENGTH};
