//! HTTP routes for quiz endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_question, create_quiz, get_questions, list_quizzes, submit_answers, QuizHandlers,
};

/// Creates the quiz router with all endpoints.
pub fn quiz_routes(handlers: QuizHandlers) -> Router {
    Router::new()
        .route("/", post(create_quiz).get(list_quizzes))
        .route("/:id/questions", get(get_questions).post(add_question))
        .route("/:id/submit", post(submit_answers))
        .with_state(handlers)
}
