//! HTTP adapters - REST API implementations.

pub mod quiz;

// Re-export key types for convenience
pub use quiz::quiz_routes;
pub use quiz::QuizHandlers;
