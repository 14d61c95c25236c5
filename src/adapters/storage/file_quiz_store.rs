//! File-based Quiz Store Adapter
//!
//! Stores each quiz as a pretty-printed JSON document named `<quiz-id>.json`
//! under an injected base directory. The directory is created on demand, so
//! the store needs no separate bootstrap step.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::QuizId;
use crate::domain::quiz::Quiz;
use crate::ports::{QuizStore, QuizStoreError, QuizSummary};

/// File-based storage for quiz documents
#[derive(Debug, Clone)]
pub struct FileQuizStore {
    base_path: PathBuf,
}

impl FileQuizStore {
    /// Create a new file store with a base directory
    ///
    /// # Arguments
    /// * `base_path` - The root directory for storing quiz documents
    ///
    /// # Example
    /// ```ignore
    /// let store = FileQuizStore::new("./data/quizzes");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the document file path for a quiz
    fn quiz_file_path(&self, id: &QuizId) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), QuizStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| QuizStoreError::Io(e.to_string()))
    }

    async fn read_document(&self, path: &Path) -> Result<Quiz, QuizStoreError> {
        let json = fs::read_to_string(path)
            .await
            .map_err(|e| QuizStoreError::Io(e.to_string()))?;

        serde_json::from_str(&json).map_err(|e| QuizStoreError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl QuizStore for FileQuizStore {
    async fn save(&self, quiz: &Quiz) -> Result<(), QuizStoreError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(quiz)
            .map_err(|e| QuizStoreError::Serialization(e.to_string()))?;

        fs::write(self.quiz_file_path(quiz.id()), json)
            .await
            .map_err(|e| QuizStoreError::Io(e.to_string()))
    }

    async fn find_by_id(&self, id: &QuizId) -> Result<Option<Quiz>, QuizStoreError> {
        let path = self.quiz_file_path(id);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(self.read_document(&path).await?))
    }

    async fn list_metadata(&self) -> Result<Vec<QuizSummary>, QuizStoreError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| QuizStoreError::Io(e.to_string()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| QuizStoreError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                paths.push(path);
            }
        }

        // read_dir order is platform-dependent; sort for a stable listing
        paths.sort();

        let mut summaries = Vec::with_capacity(paths.len());
        for path in paths {
            let quiz = self.read_document(&path).await?;
            summaries.push(QuizSummary {
                id: *quiz.id(),
                title: quiz.title().to_string(),
            });
        }

        Ok(summaries)
    }
}
