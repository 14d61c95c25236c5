//! SubmitAnswersHandler - Query handler for scoring a submission.

use std::sync::Arc;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::{evaluate, Answer, Evaluation, QuizError};
use crate::ports::QuizStore;

/// Command carrying one submission against one quiz.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub quiz_id: QuizId,
    pub answers: Vec<Answer>,
}

/// Handler for evaluating submissions.
///
/// Read-only: loads a quiz snapshot and delegates to the pure evaluator,
/// so any number of submissions can be scored concurrently.
pub struct SubmitAnswersHandler {
    store: Arc<dyn QuizStore>,
}

impl SubmitAnswersHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<Evaluation, QuizError> {
        let quiz = self
            .store
            .find_by_id(&cmd.quiz_id)
            .await?
            .ok_or_else(|| QuizError::not_found(cmd.quiz_id))?;

        Ok(evaluate(&quiz, &cmd.answers))
    }
}
