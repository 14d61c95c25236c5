//! Integration tests for quiz HTTP endpoints.
//!
//! These tests verify the HTTP layer wiring for quiz operations:
//! 1. Request DTOs deserialize correctly
//! 2. Handlers map domain outcomes to the right status codes
//! 3. Response bodies carry the documented shapes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use quizforge::adapters::http::quiz::dto::{
    AddQuestionRequest, CreateQuizRequest, SubmitAnswersRequest,
};
use quizforge::adapters::http::quiz::handlers::{
    add_question, create_quiz, get_questions, list_quizzes, submit_answers,
};
use quizforge::adapters::http::QuizHandlers;
use quizforge::adapters::storage::InMemoryQuizStore;
use quizforge::application::handlers::quiz::{
    AddQuestionHandler, CreateQuizHandler, GetQuizHandler, ListQuizzesHandler,
    SubmitAnswersHandler,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_handlers() -> QuizHandlers {
    let store = Arc::new(InMemoryQuizStore::new());
    QuizHandlers::new(
        Arc::new(CreateQuizHandler::new(store.clone())),
        Arc::new(AddQuestionHandler::new(store.clone())),
        Arc::new(GetQuizHandler::new(store.clone())),
        Arc::new(ListQuizzesHandler::new(store.clone())),
        Arc::new(SubmitAnswersHandler::new(store)),
    )
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn create_request(title: &str) -> Json<CreateQuizRequest> {
    Json(serde_json::from_value(json!({ "title": title })).unwrap())
}

fn single_question_request() -> Json<AddQuestionRequest> {
    Json(
        serde_json::from_value(json!({
            "text": "2+2=?",
            "type": "single",
            "options": [
                { "text": "3", "isCorrect": false },
                { "text": "4", "isCorrect": true },
                { "text": "5", "isCorrect": false }
            ]
        }))
        .unwrap(),
    )
}

async fn created_quiz_id(handlers: &QuizHandlers, title: &str) -> String {
    let response = create_quiz(State(handlers.clone()), create_request(title)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["quizId"]
        .as_str()
        .unwrap()
        .to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn create_quiz_returns_201_with_quiz_id() {
    let handlers = test_handlers();

    let response = create_quiz(State(handlers), create_request("Algebra")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["quizId"].as_str().is_some());
    assert_eq!(body["message"], "Quiz created successfully");
}

#[tokio::test]
async fn create_quiz_with_empty_title_returns_400() {
    let handlers = test_handlers();

    let response = create_quiz(State(handlers), create_request("")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Title is required");
}

#[tokio::test]
async fn list_quizzes_returns_metadata_without_questions() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    let add_response = add_question(
        State(handlers.clone()),
        Path(quiz_id.clone()),
        single_question_request(),
    )
    .await;
    assert_eq!(add_response.status(), StatusCode::CREATED);

    let response = list_quizzes(State(handlers)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], quiz_id.as_str());
    assert_eq!(items[0]["title"], "Algebra");
    assert!(items[0].get("questions").is_none());
}

#[tokio::test]
async fn add_question_returns_the_constructed_question() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    let response = add_question(
        State(handlers),
        Path(quiz_id),
        single_question_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["type"], "single");
    assert_eq!(body["text"], "2+2=?");

    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(options[1]["isCorrect"], true);
    assert!(options[0]["id"].as_str().unwrap().starts_with("opt-"));
}

#[tokio::test]
async fn add_question_with_bad_payload_returns_400_with_reason() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    let request: Json<AddQuestionRequest> = Json(
        serde_json::from_value(json!({
            "text": "2+2=?",
            "type": "single",
            "options": [
                { "text": "3", "isCorrect": false }
            ]
        }))
        .unwrap(),
    );

    let response = add_question(State(handlers), Path(quiz_id), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "single choice questions must have exactly one correct option"
    );
}

#[tokio::test]
async fn add_question_to_unknown_quiz_returns_404() {
    let handlers = test_handlers();

    let response = add_question(
        State(handlers),
        Path("8b9cf3f3-3a86-44a9-98ba-0f8b17f102b4".to_string()),
        single_question_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_quiz_id_is_reported_as_not_found() {
    let handlers = test_handlers();

    let response = get_questions(State(handlers), Path("not-a-quiz-id".to_string())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_questions_strips_correct_answer_flags() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    add_question(
        State(handlers.clone()),
        Path(quiz_id.clone()),
        single_question_request(),
    )
    .await;

    let response = get_questions(State(handlers), Path(quiz_id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let questions = body.as_array().unwrap();
    assert_eq!(questions.len(), 1);

    for option in questions[0]["options"].as_array().unwrap() {
        assert!(option.get("isCorrect").is_none());
        assert!(option["id"].as_str().is_some());
        assert!(option["text"].as_str().is_some());
    }
}

#[tokio::test]
async fn submit_answers_scores_the_submission() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    let add_response = add_question(
        State(handlers.clone()),
        Path(quiz_id.clone()),
        single_question_request(),
    )
    .await;
    let question = body_json(add_response).await;
    let question_id = question["id"].as_str().unwrap();
    let correct_option = question["options"]
        .as_array()
        .unwrap()
        .iter()
        .find(|opt| opt["isCorrect"] == true)
        .unwrap()["id"]
        .as_str()
        .unwrap();

    let request: Json<SubmitAnswersRequest> = Json(
        serde_json::from_value(json!({
            "answers": [
                { "questionId": question_id, "selected": [correct_option] }
            ]
        }))
        .unwrap(),
    );

    let response = submit_answers(State(handlers), Path(quiz_id), request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 1);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn submit_answers_with_non_array_body_returns_400() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    let request: Json<SubmitAnswersRequest> =
        Json(serde_json::from_value(json!({ "answers": "nope" })).unwrap());

    let response = submit_answers(State(handlers), Path(quiz_id), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Answers array required");
}

#[tokio::test]
async fn submit_answers_ignores_unknown_question_ids() {
    let handlers = test_handlers();
    let quiz_id = created_quiz_id(&handlers, "Algebra").await;

    add_question(
        State(handlers.clone()),
        Path(quiz_id.clone()),
        single_question_request(),
    )
    .await;

    let request: Json<SubmitAnswersRequest> = Json(
        serde_json::from_value(json!({
            "answers": [
                { "questionId": "no-such-question", "selected": ["opt-x"] }
            ]
        }))
        .unwrap(),
    );

    let response = submit_answers(State(handlers), Path(quiz_id), request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["score"], 0);
    assert_eq!(body["total"], 1);
}
