//! HTTP DTOs for quiz endpoints.
//!
//! These types decouple the HTTP API from domain types. Request DTOs are
//! deliberately lenient: missing fields default to values the domain layer
//! rejects with a specific reason, instead of failing opaquely during
//! deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::quiz::{
    Answer, Evaluation, OptionPayload, Question, QuestionKind, QuestionPayload,
};
use crate::ports::QuizSummary;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuizRequest {
    #[serde(default)]
    pub title: String,
}

/// One answer option inside an add-question request.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "isCorrect")]
    pub is_correct: bool,
}

/// Request to add a question to a quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct AddQuestionRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub question_type: String,
    pub options: Option<Vec<OptionRequest>>,
}

impl AddQuestionRequest {
    /// Converts the request into the raw payload the validator consumes.
    pub fn into_payload(self) -> QuestionPayload {
        QuestionPayload {
            text: self.text,
            question_type: self.question_type,
            options: self.options.map(|options| {
                options
                    .into_iter()
                    .map(|opt| OptionPayload {
                        text: opt.text,
                        is_correct: opt.is_correct,
                    })
                    .collect()
            }),
        }
    }
}

/// Request to submit answers for scoring.
///
/// `answers` stays untyped here so a non-array value can be reported as a
/// bad request rather than a deserialization failure, and so individual
/// entries can be coerced leniently.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: Value,
}

impl SubmitAnswersRequest {
    /// Interprets the submitted answers.
    ///
    /// Returns `None` when `answers` is not an array. Within the array,
    /// entries are coerced to the evaluator's shape: ids (question and
    /// option alike) are taken in their canonical string form from JSON
    /// strings, numbers or booleans; a missing or non-array `selected`
    /// is treated as empty; entries without a usable question id are
    /// dropped, matching the evaluator's skip-unknown behavior.
    pub fn parse_answers(&self) -> Option<Vec<Answer>> {
        let entries = self.answers.as_array()?;

        let answers = entries
            .iter()
            .filter_map(|entry| {
                let question_id = coerce_id(entry.get("questionId")?)?;
                let selected = match entry.get("selected") {
                    Some(Value::Array(values)) => {
                        values.iter().filter_map(coerce_id).collect()
                    }
                    _ => Vec::new(),
                };
                Some(Answer::new(question_id, selected))
            })
            .collect();

        Some(answers)
    }
}

/// Canonical string form of an id-like JSON value.
fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for quiz command operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizCommandResponse {
    pub quiz_id: String,
    pub message: String,
}

/// Quiz metadata for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummaryResponse {
    pub id: String,
    pub title: String,
}

impl From<QuizSummary> for QuizSummaryResponse {
    fn from(summary: QuizSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
        }
    }
}

/// An option as returned to quiz authors, correct-answer flag included.
#[derive(Debug, Clone, Serialize)]
pub struct AuthoredOptionResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

/// The question constructed by an add-question request.
#[derive(Debug, Clone, Serialize)]
pub struct AuthoredQuestionResponse {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AuthoredOptionResponse>>,
}

impl From<Question> for AuthoredQuestionResponse {
    fn from(question: Question) -> Self {
        let options = match question.kind() {
            QuestionKind::Text => None,
            _ => Some(
                question
                    .options()
                    .iter()
                    .map(|opt| AuthoredOptionResponse {
                        id: opt.id().to_string(),
                        text: opt.text().to_string(),
                        is_correct: opt.is_correct(),
                    })
                    .collect(),
            ),
        };

        Self {
            id: question.id().to_string(),
            text: question.text().to_string(),
            kind: question.kind(),
            options,
        }
    }
}

/// An option as shown to quiz takers. Never carries `isCorrect`.
#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: String,
    pub text: String,
}

/// A question as shown to quiz takers.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionView>>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        let options = match question.kind() {
            QuestionKind::Text => None,
            _ => Some(
                question
                    .options()
                    .iter()
                    .map(|opt| OptionView {
                        id: opt.id().to_string(),
                        text: opt.text().to_string(),
                    })
                    .collect(),
            ),
        };

        Self {
            id: question.id().to_string(),
            text: question.text().to_string(),
            kind: question.kind(),
            options,
        }
    }
}

/// Scoring result for a submission.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub score: u32,
    pub total: u32,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            score: evaluation.score,
            total: evaluation.total,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
