//! Candidate pipeline rule engine: fit scoring, interview evaluation bands,
//! and stage transitions, with collaborator traits at the persistence,
//! matching, and notification seams.

pub mod domain;
pub(crate) mod interview;
pub(crate) mod pipeline;
pub mod report;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, Candidate, CandidateId, CandidateIntake, CandidateProfile,
    CandidateStage, CriteriaScores, EvaluatorRole, InterviewRecord, InterviewRound, JobPosition,
    PipelineEvent, PositionId, PositionRequirements, ScoreBreakdown, ValidationError,
};
pub use interview::{
    evaluate, EvaluationBand, InterviewEvaluation, ScoredInterview, CRITERION_MAX, CRITERION_MIN,
    PASS_THRESHOLD, RESERVE_THRESHOLD,
};
pub use pipeline::{plan_transition, PipelineStep};
pub use report::{PipelineReport, StageCountEntry};
pub use repository::{
    CandidateMatcher, CandidateStatusView, MatcherError, NotifyError, PipelineNotifier,
    RecruitmentStore, StoreError,
};
pub use router::recruiting_router;
pub use scoring::{FitScoreOutcome, FitWeights, FIT_WEIGHTS};
pub use service::{RecruitingService, RecruitingServiceError};
