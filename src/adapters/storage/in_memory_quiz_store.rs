//! In-Memory Quiz Store Adapter
//!
//! Stores quiz documents in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::Quiz;
use crate::ports::{QuizStore, QuizStoreError, QuizSummary};

/// In-memory storage for quiz documents
#[derive(Debug, Clone)]
pub struct InMemoryQuizStore {
    quizzes: Arc<RwLock<HashMap<QuizId, Quiz>>>,
}

impl InMemoryQuizStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.quizzes.write().await.clear();
    }

    /// Get the number of stored quizzes
    pub async fn count(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

impl Default for InMemoryQuizStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizStore for InMemoryQuizStore {
    async fn save(&self, quiz: &Quiz) -> Result<(), QuizStoreError> {
        let mut quizzes = self.quizzes.write().await;
        quizzes.insert(*quiz.id(), quiz.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &QuizId) -> Result<Option<Quiz>, QuizStoreError> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn list_metadata(&self) -> Result<Vec<QuizSummary>, QuizStoreError> {
        let quizzes = self.quizzes.read().await;
        let mut summaries: Vec<QuizSummary> = quizzes
            .values()
            .map(|quiz| QuizSummary {
                id: *quiz.id(),
                title: quiz.title().to_string(),
            })
            .collect();

        // HashMap iteration order is arbitrary; sort for a stable listing
        summaries.sort_by_key(|summary| summary.id.to_string());
        Ok(summaries)
    }
}
