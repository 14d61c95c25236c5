//! Answer evaluation - deterministic scoring of submitted answers.
//!
//! Evaluation is a pure read-only function over a quiz document and a
//! submission. It degrades gracefully rather than failing the whole
//! submission: answers it cannot interpret (unknown question ids, free-text
//! questions, malformed selections) are skipped without affecting the score.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::aggregate::{QuestionKind, Quiz};

/// One submitted answer. Transient: exists only for the duration of a
/// single evaluation call and is never persisted.
///
/// `selected` holds option ids already coerced to their canonical string
/// form by the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: String,
    pub selected: Vec<String>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, selected: Vec<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected,
        }
    }
}

/// Result of evaluating a submission against a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Points awarded, one per correctly answered scorable question entry.
    pub score: u32,
    /// Count of scorable (non-text) questions in the quiz.
    pub total: u32,
}

/// Scores a submission against a quiz document.
///
/// Per-kind matching rules:
///
/// - `Single`: a point is awarded iff exactly one option id was selected
///   and it equals the id of the question's correct option.
/// - `Multiple`: a point is awarded iff the selected id set is exactly the
///   correct id set. Both sides are normalized to sets first, so duplicate
///   selections neither help nor hurt; subsets and supersets score zero.
/// - `Text`: never auto-scored.
///
/// Answers referencing unknown question ids are ignored. Each submitted
/// answer is evaluated independently, including repeated entries for the
/// same question id.
pub fn evaluate(quiz: &Quiz, answers: &[Answer]) -> Evaluation {
    let questions_by_id: HashMap<String, _> = quiz
        .questions()
        .iter()
        .map(|q| (q.id().to_string(), q))
        .collect();

    let mut score = 0u32;

    for answer in answers {
        let Some(question) = questions_by_id.get(answer.question_id.as_str()) else {
            continue;
        };

        match question.kind() {
            QuestionKind::Text => continue,
            QuestionKind::Single => {
                // The validator guarantees exactly one correct option; a
                // corrupted document without one is skipped uncredited.
                let Some(correct) = question.options().iter().find(|opt| opt.is_correct()) else {
                    continue;
                };

                if answer.selected.len() == 1 && answer.selected[0] == correct.id().as_str() {
                    score += 1;
                }
            }
            QuestionKind::Multiple => {
                let correct_ids: BTreeSet<&str> = question
                    .options()
                    .iter()
                    .filter(|opt| opt.is_correct())
                    .map(|opt| opt.id().as_str())
                    .collect();

                let selected_ids: BTreeSet<&str> =
                    answer.selected.iter().map(String::as_str).collect();

                if selected_ids == correct_ids {
                    score += 1;
                }
            }
        }
    }

    let total = quiz
        .questions()
        .iter()
        .filter(|q| q.kind().is_scorable())
        .count() as u32;

    Evaluation { score, total }
}
