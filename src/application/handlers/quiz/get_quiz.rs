//! GetQuizHandler - Query handler for loading a quiz document.

use std::sync::Arc;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::{Quiz, QuizError};
use crate::ports::QuizStore;

/// Query to load a quiz by id.
#[derive(Debug, Clone)]
pub struct GetQuizQuery {
    pub quiz_id: QuizId,
}

/// Handler for loading quiz documents.
pub struct GetQuizHandler {
    store: Arc<dyn QuizStore>,
}

impl GetQuizHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetQuizQuery) -> Result<Quiz, QuizError> {
        self.store
            .find_by_id(&query.quiz_id)
            .await?
            .ok_or_else(|| QuizError::not_found(query.quiz_id))
    }
}
