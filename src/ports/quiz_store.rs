//! Quiz store port.
//!
//! Defines the contract for durable keyed storage of quiz documents.
//! The quiz document is stored and replaced as a whole; there are no
//! partial updates at this boundary.
//!
//! # Design
//!
//! - **Whole-document writes**: `save` overwrites the full document, for
//!   both creation and mutation. Two concurrent mutations of the same quiz
//!   therefore race (last writer wins); callers needing stronger guarantees
//!   must add per-quiz mutual exclusion on top of this port.
//! - **Absence is not an error**: a missing quiz id is `Ok(None)`, letting
//!   the caller translate it into its own not-found signal. Errors from this
//!   port always mean infrastructure failure.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::Quiz;

/// Projection of a quiz to its listing metadata.
///
/// Deliberately excludes question bodies: listings never carry
/// correct-answer data or question content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
}

/// Errors surfaced by quiz store implementations.
#[derive(Debug, Clone, Error)]
pub enum QuizStoreError {
    #[error("storage I/O failure: {0}")]
    Io(String),

    #[error("failed to serialize quiz document: {0}")]
    Serialization(String),

    #[error("failed to deserialize quiz document: {0}")]
    Deserialization(String),
}

/// Storage port for quiz documents.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Persists a quiz document, creating it or overwriting an existing
    /// document under the same id.
    async fn save(&self, quiz: &Quiz) -> Result<(), QuizStoreError>;

    /// Loads a quiz document by id.
    ///
    /// Returns `Ok(None)` if no document exists under the id.
    async fn find_by_id(&self, id: &QuizId) -> Result<Option<Quiz>, QuizStoreError>;

    /// Lists id and title for every stored quiz.
    async fn list_metadata(&self) -> Result<Vec<QuizSummary>, QuizStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn quiz_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn QuizStore) {}
    }
}
