use serde::Serialize;

use super::domain::{
    Application, ApplicationId, Candidate, CandidateId, CandidateProfile, CandidateStage,
    InterviewRecord, JobPosition, PipelineEvent, PositionId, PositionRequirements, ScoreBreakdown,
};
use super::pipeline::PipelineStep;

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Each method is one atomic write: `save_candidate_score` and
/// `save_stage_transition` update the candidate and, when given, the
/// application together or not at all. The store is not assumed to support
/// transactions across separate calls.
pub trait RecruitmentStore: Send + Sync {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError>;
    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError>;
    fn candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    fn insert_application(&self, application: Application) -> Result<Application, StoreError>;
    fn fetch_application(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError>;

    fn insert_position(&self, position: JobPosition) -> Result<JobPosition, StoreError>;
    fn fetch_position(&self, id: &PositionId) -> Result<Option<JobPosition>, StoreError>;
    fn open_positions(&self) -> Result<Vec<JobPosition>, StoreError>;

    fn save_candidate_score(
        &self,
        candidate_id: &CandidateId,
        application_id: Option<&ApplicationId>,
        score: u8,
        breakdown: &ScoreBreakdown,
    ) -> Result<(), StoreError>;

    fn save_stage_transition(
        &self,
        candidate_id: &CandidateId,
        application_id: Option<&ApplicationId>,
        stage: CandidateStage,
    ) -> Result<(), StoreError>;

    fn save_interview_record(&self, record: InterviewRecord)
        -> Result<InterviewRecord, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// External matcher producing the four sub-scores for a candidate/position
/// pair. Opaque: may be rule-based or model-based.
pub trait CandidateMatcher: Send + Sync {
    fn match_candidate(
        &self,
        profile: &CandidateProfile,
        requirements: &PositionRequirements,
    ) -> Result<ScoreBreakdown, MatcherError>;
}

/// Matcher failure, propagated to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("matcher unavailable: {0}")]
    Unavailable(String),
    #[error("matcher failed: {0}")]
    Failed(String),
}

/// Outbound hook receiving pipeline events (e-mail, websocket, audit log).
///
/// Fire-and-forget at the call site: a delivery failure never unwinds the
/// transition that produced the event.
pub trait PipelineNotifier: Send + Sync {
    fn emit(&self, event: &PipelineEvent) -> Result<(), NotifyError>;
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a candidate's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateStatusView {
    pub candidate_id: CandidateId,
    pub name: String,
    pub stage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_step: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<u8>,
}

impl CandidateStatusView {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.id.clone(),
            name: candidate.name.clone(),
            stage: candidate.stage.label(),
            pipeline_step: PipelineStep::for_stage(candidate.stage).map(PipelineStep::label),
            fit_score: candidate.fit_score,
        }
    }
}
