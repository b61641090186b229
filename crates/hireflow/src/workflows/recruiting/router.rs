use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    ApplicationId, CandidateId, CandidateIntake, CandidateStage, CriteriaScores, InterviewRound,
    PipelineEvent, PositionId,
};
use super::repository::{
    CandidateMatcher, CandidateStatusView, PipelineNotifier, RecruitmentStore, StoreError,
};
use super::service::{RecruitingService, RecruitingServiceError};

/// Router builder exposing HTTP endpoints for the recruiting rule engine.
pub fn recruiting_router<S, M, N>(service: Arc<RecruitingService<S, M, N>>) -> Router
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/recruiting/candidates",
            post(intake_handler::<S, M, N>),
        )
        .route(
            "/api/v1/recruiting/candidates/:candidate_id",
            get(status_handler::<S, M, N>),
        )
        .route(
            "/api/v1/recruiting/candidates/:candidate_id/fit-score",
            post(fit_score_handler::<S, M, N>),
        )
        .route(
            "/api/v1/recruiting/candidates/:candidate_id/stage",
            post(stage_handler::<S, M, N>),
        )
        .route(
            "/api/v1/recruiting/interviews",
            post(interview_handler::<S, M, N>),
        )
        .route(
            "/api/v1/recruiting/pipeline/report",
            get(report_handler::<S, M, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct FitScoreRequest {
    #[serde(default)]
    pub(crate) position_id: Option<String>,
    #[serde(default)]
    pub(crate) application_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StageRequest {
    pub(crate) stage: String,
    pub(crate) actor: String,
    #[serde(default)]
    pub(crate) application_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransitionResponse {
    pub(crate) changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) event: Option<PipelineEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InterviewScoreRequest {
    pub(crate) application_id: String,
    pub(crate) round: InterviewRound,
    pub(crate) criteria: CriteriaScores,
    #[serde(default)]
    pub(crate) feedback: Option<String>,
}

pub(crate) async fn intake_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
    axum::Json(intake): axum::Json<CandidateIntake>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    match service.register_candidate(intake) {
        Ok(candidate) => {
            let view = CandidateStatusView::from_candidate(&candidate);
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    let id = CandidateId(candidate_id);
    match service.candidate(&id) {
        Ok(candidate) => {
            let view = CandidateStatusView::from_candidate(&candidate);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fit_score_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<FitScoreRequest>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    let candidate_id = CandidateId(candidate_id);
    let position_id = request.position_id.map(PositionId);
    let application_id = request.application_id.map(ApplicationId);

    match service.compute_fit_score(&candidate_id, position_id.as_ref(), application_id.as_ref()) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn stage_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
    Path(candidate_id): Path<String>,
    axum::Json(request): axum::Json<StageRequest>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    let to_stage = match CandidateStage::from_label(&request.stage) {
        Ok(stage) => stage,
        Err(error) => return error_response(RecruitingServiceError::Validation(error)),
    };

    let candidate_id = CandidateId(candidate_id);
    let application_id = request.application_id.map(ApplicationId);

    match service.transition_stage(
        &candidate_id,
        to_stage,
        &request.actor,
        application_id.as_ref(),
    ) {
        Ok(event) => {
            let response = TransitionResponse {
                changed: event.is_some(),
                event,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn interview_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
    axum::Json(request): axum::Json<InterviewScoreRequest>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    let application_id = ApplicationId(request.application_id);

    match service.evaluate_interview(
        &application_id,
        request.round,
        request.criteria,
        request.feedback,
        Utc::now(),
    ) {
        Ok(scored) => (StatusCode::OK, axum::Json(scored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<S, M, N>(
    State(service): State<Arc<RecruitingService<S, M, N>>>,
) -> Response
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    match service.pipeline_report() {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: RecruitingServiceError) -> Response {
    let status = match &error {
        RecruitingServiceError::Validation(_) | RecruitingServiceError::NoPositionAvailable => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        RecruitingServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        RecruitingServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        RecruitingServiceError::Store(StoreError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        RecruitingServiceError::Matcher(_) => StatusCode::BAD_GATEWAY,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
