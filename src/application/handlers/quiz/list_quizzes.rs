//! ListQuizzesHandler - Query handler for the quiz metadata listing.

use std::sync::Arc;

use crate::domain::quiz::QuizError;
use crate::ports::{QuizStore, QuizSummary};

/// Handler for listing quiz metadata.
///
/// Returns id and title only; question bodies never appear in listings.
pub struct ListQuizzesHandler {
    store: Arc<dyn QuizStore>,
}

impl ListQuizzesHandler {
    pub fn new(store: Arc<dyn QuizStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<QuizSummary>, QuizError> {
        Ok(self.store.list_metadata().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryQuizStore;
    use crate::domain::foundation::QuizId;
    use crate::domain::quiz::Quiz;

    #[tokio::test]
    async fn lists_id_and_title_for_every_quiz() {
        let store = Arc::new(InMemoryQuizStore::new());
        let algebra = Quiz::new(QuizId::new(), "Algebra".to_string()).unwrap();
        let geometry = Quiz::new(QuizId::new(), "Geometry".to_string()).unwrap();
        store.save(&algebra).await.unwrap();
        store.save(&geometry).await.unwrap();

        let handler = ListQuizzesHandler::new(store);
        let summaries = handler.handle().await.unwrap();

        assert_eq!(summaries.len(), 2);
        let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Algebra"));
        assert!(titles.contains(&"Geometry"));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListQuizzesHandler::new(Arc::new(InMemoryQuizStore::new()));
        let summaries = handler.handle().await.unwrap();
        assert!(summaries.is_empty());
    }
}
