use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::auth::{require_admin, AdminAuthenticator, AdminClaims};
use super::domain::{Answer, Respondent, SubmissionId};
use super::repository::{RepositoryError, SubmissionFilter, SubmissionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitResponseRequest {
    pub(crate) submission_id: String,
    #[serde(flatten)]
    pub(crate) answer: Answer,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    pub(crate) username: String,
    #[serde(default)]
    pub(crate) password: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SimulationRequest {
    #[serde(default)]
    pub(crate) learning_score: i64,
    #[serde(default)]
    pub(crate) application_score: i64,
}

/// Shared state for admin handlers.
pub(crate) struct AdminState<R> {
    service: Arc<AssessmentService<R>>,
    auth: Arc<AdminAuthenticator>,
}

impl<R> Clone for AdminState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            auth: self.auth.clone(),
        }
    }
}

/// Router builder exposing the respondent-facing questionnaire endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/questions", get(questions_handler::<R>))
        .route("/api/start", post(start_handler::<R>))
        .route("/api/submit-response", post(submit_response_handler::<R>))
        .route("/api/complete/:submission_id", post(complete_handler::<R>))
        .route("/api/results/:submission_id", get(results_handler::<R>))
        .with_state(service)
}

/// Router builder for the admin console. Everything except login requires a bearer token.
pub fn admin_router<R>(
    service: Arc<AssessmentService<R>>,
    auth: Arc<AdminAuthenticator>,
) -> Router
where
    R: SubmissionRepository + 'static,
{
    let state = AdminState {
        service,
        auth: auth.clone(),
    };

    let protected = Router::new()
        .route("/api/admin/auth/verify", get(verify_handler))
        .route("/api/admin/submissions", get(list_submissions_handler::<R>))
        .route(
            "/api/admin/submissions/:submission_id",
            get(submission_detail_handler::<R>),
        )
        .route("/api/admin/simulate", post(simulate_handler::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_admin));

    Router::new()
        .route("/api/admin/auth/login", post(login_handler::<R>))
        .merge(protected)
        .with_state(state)
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let questions = service.questions();
    let payload = json!({
        "questions": questions,
        "total": questions.len(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(respondent): Json<Respondent>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.start(respondent) {
        Ok(submission) => {
            let payload = json!({
                "submission_id": submission.submission_id,
                "status": "success",
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_response_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(request): Json<SubmitResponseRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let submission_id = SubmissionId(request.submission_id);
    match service.record_response(&submission_id, request.answer) {
        Ok(()) => {
            let payload = json!({
                "status": "success",
                "message": "Response recorded",
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn complete_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.complete(&SubmissionId(submission_id)) {
        Ok(scores) => {
            let payload = json!({
                "status": "success",
                "message": "Submission marked as complete",
                "scores": scores,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.results(&SubmissionId(submission_id)) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn login_handler<R>(
    State(state): State<AdminState<R>>,
    Json(request): Json<LoginRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match state.auth.login(&request.username, &request.password) {
        Ok(token) => (StatusCode::OK, Json(token)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn verify_handler(Extension(claims): Extension<AdminClaims>) -> Response {
    let payload = json!({
        "valid": true,
        "username": claims.sub,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn list_submissions_handler<R>(
    State(state): State<AdminState<R>>,
    Query(filter): Query<SubmissionFilter>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match state.service.list(&filter) {
        Ok(submissions) => {
            (StatusCode::OK, Json(json!({ "submissions": submissions }))).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submission_detail_handler<R>(
    State(state): State<AdminState<R>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match state.service.detail(&SubmissionId(submission_id)) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn simulate_handler<R>(
    State(state): State<AdminState<R>>,
    Json(request): Json<SimulationRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match state
        .service
        .simulate(request.learning_score, request.application_score)
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_status(error: &AssessmentServiceError) -> StatusCode {
    match error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict)
        | AssessmentServiceError::SubmissionClosed(_)
        | AssessmentServiceError::AlreadyComplete(_)
        | AssessmentServiceError::NotComplete(_) => StatusCode::CONFLICT,
        AssessmentServiceError::Scoring(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = error_status(&error);
    let payload = match &error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => json!({
            "error": "submission not found",
        }),
        other => json!({
            "error": other.to_string(),
        }),
    };
    (status, Json(payload)).into_response()
}
