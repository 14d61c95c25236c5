//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::quiz::{
    AddQuestionCommand, AddQuestionHandler, CreateQuizCommand, CreateQuizHandler, GetQuizHandler,
    GetQuizQuery, ListQuizzesHandler, SubmitAnswersCommand, SubmitAnswersHandler,
};
use crate::domain::foundation::QuizId;
use crate::domain::quiz::QuizError;

use super::dto::{
    AddQuestionRequest, AuthoredQuestionResponse, CreateQuizRequest, ErrorResponse,
    EvaluationResponse, QuestionView, QuizCommandResponse, QuizSummaryResponse,
    SubmitAnswersRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuizHandlers {
    create_handler: Arc<CreateQuizHandler>,
    add_question_handler: Arc<AddQuestionHandler>,
    get_quiz_handler: Arc<GetQuizHandler>,
    list_handler: Arc<ListQuizzesHandler>,
    submit_handler: Arc<SubmitAnswersHandler>,
}

impl QuizHandlers {
    pub fn new(
        create_handler: Arc<CreateQuizHandler>,
        add_question_handler: Arc<AddQuestionHandler>,
        get_quiz_handler: Arc<GetQuizHandler>,
        list_handler: Arc<ListQuizzesHandler>,
        submit_handler: Arc<SubmitAnswersHandler>,
    ) -> Self {
        Self {
            create_handler,
            add_question_handler,
            get_quiz_handler,
            list_handler,
            submit_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/quizzes - Create a new quiz
pub async fn create_quiz(
    State(handlers): State<QuizHandlers>,
    Json(req): Json<CreateQuizRequest>,
) -> Response {
    let cmd = CreateQuizCommand { title: req.title };

    match handlers.create_handler.handle(cmd).await {
        Ok(quiz) => {
            let response = QuizCommandResponse {
                quiz_id: quiz.id().to_string(),
                message: "Quiz created successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quizzes - List quiz metadata
pub async fn list_quizzes(State(handlers): State<QuizHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(summaries) => {
            let response: Vec<QuizSummaryResponse> =
                summaries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quizzes/:id/questions - List a quiz's questions
///
/// Options are projected without their correct-answer flags; this is the
/// quiz-taker view of the document.
pub async fn get_questions(
    State(handlers): State<QuizHandlers>,
    Path(quiz_id): Path<String>,
) -> Response {
    let Some(quiz_id) = parse_quiz_id(&quiz_id) else {
        return quiz_not_found(&quiz_id);
    };

    match handlers.get_quiz_handler.handle(GetQuizQuery { quiz_id }).await {
        Ok(quiz) => {
            let response: Vec<QuestionView> =
                quiz.questions().iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quizzes/:id/questions - Add a question to a quiz
pub async fn add_question(
    State(handlers): State<QuizHandlers>,
    Path(quiz_id): Path<String>,
    Json(req): Json<AddQuestionRequest>,
) -> Response {
    let Some(quiz_id) = parse_quiz_id(&quiz_id) else {
        return quiz_not_found(&quiz_id);
    };

    let cmd = AddQuestionCommand {
        quiz_id,
        payload: req.into_payload(),
    };

    match handlers.add_question_handler.handle(cmd).await {
        Ok(question) => {
            let response: AuthoredQuestionResponse = question.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quizzes/:id/submit - Score a submission against a quiz
pub async fn submit_answers(
    State(handlers): State<QuizHandlers>,
    Path(quiz_id): Path<String>,
    Json(req): Json<SubmitAnswersRequest>,
) -> Response {
    let Some(quiz_id) = parse_quiz_id(&quiz_id) else {
        return quiz_not_found(&quiz_id);
    };

    let Some(answers) = req.parse_answers() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Answers array required")),
        )
            .into_response();
    };

    let cmd = SubmitAnswersCommand { quiz_id, answers };

    match handlers.submit_handler.handle(cmd).await {
        Ok(evaluation) => {
            let response: EvaluationResponse = evaluation.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_quiz_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// An unparseable path id cannot name any stored quiz, so it is reported
/// as not-found rather than as a malformed request.
fn parse_quiz_id(raw: &str) -> Option<QuizId> {
    raw.parse::<QuizId>().ok()
}

fn quiz_not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Quiz", id)),
    )
        .into_response()
}

fn handle_quiz_error(error: QuizError) -> Response {
    match error {
        QuizError::NotFound(id) => quiz_not_found(&id.to_string()),
        QuizError::InvalidTitle => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Title is required")),
        )
            .into_response(),
        QuizError::Rejected(reason) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(reason.to_string())),
        )
            .into_response(),
        QuizError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "quiz storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
