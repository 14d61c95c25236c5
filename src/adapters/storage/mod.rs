//! Storage Adapters
//!
//! Implementations of the QuizStore port for persisting quiz documents.
//!
//! ## Available Adapters
//!
//! - **FileQuizStore** - Stores each quiz as a JSON document on disk
//! - **InMemoryQuizStore** - Stores quizzes in memory (testing/development)

mod file_quiz_store;
mod in_memory_quiz_store;

pub use file_quiz_store::FileQuizStore;
pub use in_memory_quiz_store::InMemoryQuizStore;
