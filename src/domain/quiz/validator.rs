//! Question payload validation.
//!
//! Pure acceptance rules for author-submitted question payloads. Rules are
//! checked in a fixed order and the first failure wins, so a payload with
//! several problems always reports the same rejection reason.

use super::aggregate::QuestionKind;
use super::errors::QuestionRejection;
use super::payload::QuestionPayload;

/// Maximum length of question text, in characters.
pub const MAX_QUESTION_TEXT_LENGTH: usize = 300;

/// Validates a raw question payload.
///
/// On success returns the resolved [`QuestionKind`], which the caller uses
/// to construct the domain question. Never mutates state.
pub fn validate_question(payload: &QuestionPayload) -> Result<QuestionKind, QuestionRejection> {
    if payload.text.is_empty() || payload.text.chars().count() > MAX_QUESTION_TEXT_LENGTH {
        return Err(QuestionRejection::InvalidText);
    }

    let kind = match payload.question_type.as_str() {
        "single" => QuestionKind::Single,
        "multiple" => QuestionKind::Multiple,
        "text" => QuestionKind::Text,
        _ => return Err(QuestionRejection::InvalidType),
    };

    if kind == QuestionKind::Text {
        if !payload.options().is_empty() {
            return Err(QuestionRejection::UnexpectedOptions);
        }
        return Ok(kind);
    }

    if payload.options().is_empty() {
        return Err(QuestionRejection::MissingOptions);
    }

    if payload.options().iter().any(|opt| opt.text.is_empty()) {
        return Err(QuestionRejection::InvalidOptionText);
    }

    let correct_count = payload
        .options()
        .iter()
        .filter(|opt| opt.is_correct)
        .count();

    match kind {
        QuestionKind::Single if correct_count != 1 => {
            Err(QuestionRejection::SingleChoiceCardinality)
        }
        QuestionKind::Multiple if correct_count < 1 => {
            Err(QuestionRejection::MultipleChoiceCardinality)
        }
        _ => Ok(kind),
    }
}
