use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::domain::{
    Application, ApplicationId, Candidate, CandidateId, CandidateIntake, CandidateStage,
    CriteriaScores, InterviewRecord, InterviewRound, JobPosition, PipelineEvent, PositionId,
    ValidationError,
};
use super::interview::{self, ScoredInterview};
use super::pipeline::{self, PipelineStep};
use super::report::{self, PipelineReport};
use super::repository::{
    CandidateMatcher, MatcherError, PipelineNotifier, RecruitmentStore, StoreError,
};
use super::scoring::{self, FitScoreOutcome, FIT_WEIGHTS};

/// Service composing the store, matcher, and notifier around the rule engine.
pub struct RecruitingService<S, M, N> {
    store: Arc<S>,
    matcher: Arc<M>,
    notifier: Arc<N>,
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<S, M, N> RecruitingService<S, M, N>
where
    S: RecruitmentStore + 'static,
    M: CandidateMatcher + 'static,
    N: PipelineNotifier + 'static,
{
    pub fn new(store: Arc<S>, matcher: Arc<M>, notifier: Arc<N>) -> Self {
        Self {
            store,
            matcher,
            notifier,
        }
    }

    /// Create a candidate at the `Pending` stage from an intake payload.
    pub fn register_candidate(
        &self,
        intake: CandidateIntake,
    ) -> Result<Candidate, RecruitingServiceError> {
        let candidate = Candidate {
            id: next_candidate_id(),
            name: intake.name,
            email: intake.email,
            phone: intake.phone,
            declared_position: intake.declared_position,
            profile: intake.profile,
            stage: CandidateStage::Pending,
            fit_score: None,
            fit_breakdown: None,
        };

        Ok(self.store.insert_candidate(candidate)?)
    }

    /// Open a formal application for a candidate against a position. The
    /// application starts at the candidate's current stage.
    pub fn submit_application(
        &self,
        candidate_id: &CandidateId,
        position_id: &PositionId,
        submitted_at: DateTime<Utc>,
    ) -> Result<Application, RecruitingServiceError> {
        let candidate = self
            .store
            .fetch_candidate(candidate_id)?
            .ok_or(StoreError::NotFound)?;
        let position = self
            .store
            .fetch_position(position_id)?
            .ok_or(StoreError::NotFound)?;

        let application = Application {
            id: next_application_id(),
            candidate_id: candidate.id,
            position_id: position.id,
            stage: candidate.stage,
            fit_score: None,
            fit_breakdown: None,
            submitted_at,
        };

        Ok(self.store.insert_application(application)?)
    }

    /// Compute and persist the composite fit score for a candidate.
    ///
    /// Recomputation overwrites the prior score and breakdown entirely; the
    /// score and breakdown are written in one store call so a failure leaves
    /// neither behind. A matcher failure propagates unchanged and writes
    /// nothing.
    pub fn compute_fit_score(
        &self,
        candidate_id: &CandidateId,
        position_id: Option<&PositionId>,
        application_id: Option<&ApplicationId>,
    ) -> Result<FitScoreOutcome, RecruitingServiceError> {
        let candidate = self
            .store
            .fetch_candidate(candidate_id)?
            .ok_or(StoreError::NotFound)?;

        let position = self.resolve_position(&candidate, position_id)?;

        let breakdown = self
            .matcher
            .match_candidate(&candidate.profile, &position.requirements)?;
        breakdown.validate()?;

        let score = FIT_WEIGHTS.composite(&breakdown);
        self.store
            .save_candidate_score(candidate_id, application_id, score, &breakdown)?;

        Ok(FitScoreOutcome {
            candidate_id: candidate.id,
            position_id: position.id,
            score,
            breakdown,
        })
    }

    fn resolve_position(
        &self,
        candidate: &Candidate,
        requested: Option<&PositionId>,
    ) -> Result<JobPosition, RecruitingServiceError> {
        if let Some(id) = requested {
            if let Some(position) = self.store.fetch_position(id)? {
                return Ok(position);
            }
        }

        let open = self.store.open_positions()?;
        scoring::select_position(candidate.declared_position.as_deref(), &open)
            .cloned()
            .ok_or(RecruitingServiceError::NoPositionAvailable)
    }

    /// Create an unscored interview record for a round.
    pub fn schedule_interview(
        &self,
        application_id: &ApplicationId,
        round: InterviewRound,
        scheduled_at: DateTime<Utc>,
    ) -> Result<InterviewRecord, RecruitingServiceError> {
        let application = self
            .store
            .fetch_application(application_id)?
            .ok_or(StoreError::NotFound)?;

        let record = InterviewRecord {
            application_id: application.id,
            round,
            evaluator: round.default_evaluator(),
            scheduled_at,
            feedback: None,
            criteria: None,
            total_score: None,
            passed: None,
        };

        Ok(self.store.save_interview_record(record)?)
    }

    /// Validate and aggregate criterion scores, then persist the scored
    /// record. Rounds are evaluated independently; the outcome never advances
    /// the pipeline on its own.
    pub fn evaluate_interview(
        &self,
        application_id: &ApplicationId,
        round: InterviewRound,
        criteria: CriteriaScores,
        feedback: Option<String>,
        scored_at: DateTime<Utc>,
    ) -> Result<ScoredInterview, RecruitingServiceError> {
        let application = self
            .store
            .fetch_application(application_id)?
            .ok_or(StoreError::NotFound)?;

        let evaluation = interview::evaluate(&criteria)?;

        let record = InterviewRecord {
            application_id: application.id,
            round,
            evaluator: round.default_evaluator(),
            scheduled_at: scored_at,
            feedback,
            criteria: Some(criteria),
            total_score: Some(evaluation.total),
            passed: Some(evaluation.passed),
        };
        let record = self.store.save_interview_record(record)?;

        Ok(ScoredInterview { record, evaluation })
    }

    /// Move a candidate (and any linked application) to `to_stage`.
    ///
    /// Returns `None` for the same-stage no-op. Candidate and application
    /// stages are written in one store call; on failure the transition did
    /// not occur and no event is emitted. Notification failure is logged and
    /// never fails the transition.
    pub fn transition_stage(
        &self,
        candidate_id: &CandidateId,
        to_stage: CandidateStage,
        actor: &str,
        application_id: Option<&ApplicationId>,
    ) -> Result<Option<PipelineEvent>, RecruitingServiceError> {
        let candidate = self
            .store
            .fetch_candidate(candidate_id)?
            .ok_or(StoreError::NotFound)?;

        let Some(event) = pipeline::plan_transition(&candidate, to_stage, actor, Utc::now()) else {
            return Ok(None);
        };

        self.store
            .save_stage_transition(candidate_id, application_id, to_stage)?;

        if let Err(error) = self.notifier.emit(&event) {
            warn!(candidate_id = %candidate_id.0, %error, "pipeline notification failed");
        }

        Ok(Some(event))
    }

    /// The five-step progress view re-labeled into a stage transition.
    pub fn advance_step(
        &self,
        candidate_id: &CandidateId,
        step: PipelineStep,
        actor: &str,
        application_id: Option<&ApplicationId>,
    ) -> Result<Option<PipelineEvent>, RecruitingServiceError> {
        self.transition_stage(candidate_id, step.stage(), actor, application_id)
    }

    /// Fetch a candidate for API responses.
    pub fn candidate(&self, id: &CandidateId) -> Result<Candidate, RecruitingServiceError> {
        let candidate = self.store.fetch_candidate(id)?.ok_or(StoreError::NotFound)?;
        Ok(candidate)
    }

    /// Stage-distribution summary across all candidates.
    pub fn pipeline_report(&self) -> Result<PipelineReport, RecruitingServiceError> {
        let candidates = self.store.candidates()?;
        Ok(report::pipeline_report(&candidates))
    }
}

/// Error raised by the recruiting service.
#[derive(Debug, thiserror::Error)]
pub enum RecruitingServiceError {
    #[error("no job position available to score against")]
    NoPositionAvailable,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
