//! Shared domain primitives.

mod ids;

pub use ids::{OptionId, QuestionId, QuizId};
