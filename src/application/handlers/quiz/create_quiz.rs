//! CreateQuizHandler - Command handler for creating new quizzes.

use std::sync::Arc;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::{Quiz, QuizError};
use crate::ports::QuizStore;

/// Command to create a new quiz.
#[derive(Debug, Clone)]
pub struct CreateQuizCommand {
    pub title: String,
}

/// Handler for creating quizzes.
pub struct CreateQuizHandler {
    store: Arc<dyn QuizStore>,
}

impl CreateQuizHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateQuizCommand) -> Result<Quiz, QuizError> {
        let quiz = Quiz::new(QuizId::new(), cmd.title)?;

        self.store.save(&quiz).await?;

        Ok(quiz)
    }
}
