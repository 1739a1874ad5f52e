use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::archive::{BlobStore, ResultsError};
use super::domain::Answer;
use super::service::{AnswerSubmission, AssessmentService, ServiceError};
use super::session::ProgressionError;

const SESSION_PATH: &str = "/api/v1/assessment/session";

/// Router builder exposing the questionnaire, session and results endpoints.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: BlobStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route(
            SESSION_PATH,
            post(start_handler::<S>).get(current_handler::<S>),
        )
        .route(
            "/api/v1/assessment/session/answers",
            post(answer_handler::<S>),
        )
        .route("/api/v1/assessment/session/back", post(back_handler::<S>))
        .route(
            "/api/v1/assessment/results",
            get(results_handler::<S>).delete(restart_handler::<S>),
        )
        .route("/api/v1/assessment/score", post(score_handler::<S>))
        .with_state(service)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: BlobStore + 'static,
{
    let payload = json!({
        "total_questions": service.bank().total_questions(),
        "sections": service.questions(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn start_handler<S>(State(service): State<Arc<AssessmentService<S>>>) -> Response
where
    S: BlobStore + 'static,
{
    match service.start() {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn current_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: BlobStore + 'static,
{
    match service.current() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    S: BlobStore + 'static,
{
    match service.answer(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn back_handler<S>(State(service): State<Arc<AssessmentService<S>>>) -> Response
where
    S: BlobStore + 'static,
{
    match service.back() {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: BlobStore + 'static,
{
    match service.results() {
        Ok(assessment) => (StatusCode::OK, axum::Json(assessment)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn restart_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
) -> Response
where
    S: BlobStore + 'static,
{
    match service.restart() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(answers): axum::Json<Vec<Answer>>,
) -> Response
where
    S: BlobStore + 'static,
{
    let assessment = service.score(&answers);
    (StatusCode::OK, axum::Json(assessment)).into_response()
}

fn error_response(error: ServiceError) -> Response {
    match error {
        ServiceError::NoSession => {
            let payload = json!({
                "error": error.to_string(),
                "start": SESSION_PATH,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        ServiceError::Results(ResultsError::NoAnswers) => {
            let payload = json!({
                "error": error.to_string(),
                "restart": SESSION_PATH,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        ServiceError::Progression(
            ProgressionError::EmptySelection(_)
            | ProgressionError::UnreadableValue(_)
            | ProgressionError::OutOfScale { .. },
        ) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        ServiceError::Progression(_) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        ServiceError::Results(ResultsError::Store(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
