//! Quizforge service entry point.
//!
//! Wires the file-backed quiz store into the application handlers and
//! exposes them over HTTP under `/api/quizzes`.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use quizforge::adapters::http::{quiz_routes, QuizHandlers};
use quizforge::adapters::storage::FileQuizStore;
use quizforge::application::handlers::quiz::{
    AddQuestionHandler, CreateQuizHandler, GetQuizHandler, ListQuizzesHandler,
    SubmitAnswersHandler,
};
use quizforge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let store = Arc::new(FileQuizStore::new(&config.storage.data_dir));

    let handlers = QuizHandlers::new(
        Arc::new(CreateQuizHandler::new(store.clone())),
        Arc::new(AddQuestionHandler::new(store.clone())),
        Arc::new(GetQuizHandler::new(store.clone())),
        Arc::new(ListQuizzesHandler::new(store.clone())),
        Arc::new(SubmitAnswersHandler::new(store)),
    );

    let app = Router::new()
        .nest("/api/quizzes", quiz_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, data_dir = %config.storage.data_dir.display(), "quizforge listening");

    axum::serve(listener, app).await?;

    Ok(())
}
