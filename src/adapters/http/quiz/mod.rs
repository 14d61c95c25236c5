//! HTTP adapter for quiz endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::QuizHandlers;
pub use routes::quiz_routes;
