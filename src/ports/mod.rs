//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod quiz_store;

pub use quiz_store::{QuizStore, QuizStoreError, QuizSummary};
