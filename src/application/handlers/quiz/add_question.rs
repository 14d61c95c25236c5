//! AddQuestionHandler - Command handler for appending a question to a quiz.

use std::sync::Arc;

use crate::domain::foundation::{QuestionId, QuizId};
use crate::domain::quiz::{validate_question, Question, QuestionPayload, QuizError};
use crate::ports::QuizStore;

/// Command to add a question to an existing quiz.
#[derive(Debug, Clone)]
pub struct AddQuestionCommand {
    pub quiz_id: QuizId,
    pub payload: QuestionPayload,
}

/// Handler for adding questions.
///
/// The full quiz document is loaded, mutated in memory and written back as
/// a whole. Two concurrent additions to the same quiz can race; the second
/// write wins.
pub struct AddQuestionHandler {
    store: Arc<dyn QuizStore>,
}

impl AddQuestionHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddQuestionCommand) -> Result<Question, QuizError> {
        let mut quiz = self
            .store
            .find_by_id(&cmd.quiz_id)
            .await?
            .ok_or_else(|| QuizError::not_found(cmd.quiz_id))?;

        let kind = validate_question(&cmd.payload)?;

        let question = Question::from_payload(QuestionId::new(), kind, &cmd.payload);
        quiz.append_question(question.clone());

        self.store.save(&quiz).await?;

        Ok(question)
    }
}
