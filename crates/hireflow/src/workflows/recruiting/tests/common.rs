use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::workflows::recruiting::domain::{
    Application, ApplicationId, Candidate, CandidateId, CandidateProfile, CandidateStage,
    CriteriaScores, InterviewRecord, JobPosition, PipelineEvent, PositionId, PositionRequirements,
    ScoreBreakdown,
};
use crate::workflows::recruiting::repository::{
    CandidateMatcher, MatcherError, NotifyError, PipelineNotifier, RecruitmentStore, StoreError,
};
use crate::workflows::recruiting::service::RecruitingService;

pub(super) fn profile() -> CandidateProfile {
    CandidateProfile {
        years_experience: 6,
        skills: vec!["Rust".to_string(), "SQL".to_string(), "Kubernetes".to_string()],
        education: vec!["BSc Computer Science".to_string()],
        certifications: vec!["CKA".to_string()],
    }
}

pub(super) fn candidate(suffix: &str, stage: CandidateStage) -> Candidate {
    Candidate {
        id: CandidateId(format!("cand-{suffix}")),
        name: "Jordan Alvarez".to_string(),
        email: "jordan.alvarez@example.com".to_string(),
        phone: Some("+1-515-555-0117".to_string()),
        declared_position: Some("Backend Engineer".to_string()),
        profile: profile(),
        stage,
        fit_score: None,
        fit_breakdown: None,
    }
}

pub(super) fn position(suffix: &str, title: &str) -> JobPosition {
    JobPosition {
        id: PositionId(format!("pos-{suffix}")),
        title: title.to_string(),
        department: "Engineering".to_string(),
        open: true,
        requirements: PositionRequirements {
            required_skills: vec!["Rust".to_string(), "SQL".to_string()],
            minimum_years: 4,
            education: vec!["Computer Science".to_string()],
            certifications: vec!["CKA".to_string()],
        },
    }
}

pub(super) fn application(suffix: &str, candidate: &Candidate, position: &JobPosition) -> Application {
    Application {
        id: ApplicationId(format!("app-{suffix}")),
        candidate_id: candidate.id.clone(),
        position_id: position.id.clone(),
        stage: candidate.stage,
        fit_score: None,
        fit_breakdown: None,
        submitted_at: chrono::Utc::now(),
    }
}

pub(super) fn breakdown() -> ScoreBreakdown {
    ScoreBreakdown {
        experience: 80,
        qualifications: 60,
        education: 70,
        skills: 50,
    }
}

pub(super) fn uniform_criteria(value: u8) -> CriteriaScores {
    CriteriaScores {
        skill_knowledge: value,
        communication: value,
        creativity: value,
        motivation: value,
        teamwork: value,
        analytical: value,
        culture_fit: value,
    }
}

#[derive(Default)]
struct StoreState {
    candidates: HashMap<CandidateId, Candidate>,
    applications: HashMap<ApplicationId, Application>,
    positions: Vec<JobPosition>,
    interviews: Vec<InterviewRecord>,
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub(super) fn interviews(&self) -> Vec<InterviewRecord> {
        self.state.lock().expect("store mutex poisoned").interviews.clone()
    }
}

impl RecruitmentStore for MemoryStore {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if state.candidates.contains_key(&candidate.id) {
            return Err(StoreError::Conflict);
        }
        state.candidates.insert(candidate.id.clone(), candidate.clone());
        Ok(candidate)
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.candidates.get(id).cloned())
    }

    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.candidates.values().cloned().collect())
    }

    fn insert_application(&self, application: Application) -> Result<Application, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if state.applications.contains_key(&application.id) {
            return Err(StoreError::Conflict);
        }
        state
            .applications
            .insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn fetch_application(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.applications.get(id).cloned())
    }

    fn insert_position(&self, position: JobPosition) -> Result<JobPosition, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if state.positions.iter().any(|existing| existing.id == position.id) {
            return Err(StoreError::Conflict);
        }
        state.positions.push(position.clone());
        Ok(position)
    }

    fn fetch_position(&self, id: &PositionId) -> Result<Option<JobPosition>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .positions
            .iter()
            .find(|position| &position.id == id)
            .cloned())
    }

    fn open_positions(&self) -> Result<Vec<JobPosition>, StoreError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .positions
            .iter()
            .filter(|position| position.open)
            .cloned()
            .collect())
    }

    fn save_candidate_score(
        &self,
        candidate_id: &CandidateId,
        application_id: Option<&ApplicationId>,
        score: u8,
        breakdown: &ScoreBreakdown,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if !state.candidates.contains_key(candidate_id) {
            return Err(StoreError::NotFound);
        }
        if let Some(id) = application_id {
            if !state.applications.contains_key(id) {
                return Err(StoreError::NotFound);
            }
        }

        let candidate = state
            .candidates
            .get_mut(candidate_id)
            .expect("existence checked above");
        candidate.fit_score = Some(score);
        candidate.fit_breakdown = Some(*breakdown);

        if let Some(id) = application_id {
            let application = state
                .applications
                .get_mut(id)
                .expect("existence checked above");
            application.fit_score = Some(score);
            application.fit_breakdown = Some(*breakdown);
        }

        Ok(())
    }

    fn save_stage_transition(
        &self,
        candidate_id: &CandidateId,
        application_id: Option<&ApplicationId>,
        stage: CandidateStage,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if !state.candidates.contains_key(candidate_id) {
            return Err(StoreError::NotFound);
        }
        if let Some(id) = application_id {
            if !state.applications.contains_key(id) {
                return Err(StoreError::NotFound);
            }
        }

        let candidate = state
            .candidates
            .get_mut(candidate_id)
            .expect("existence checked above");
        candidate.stage = stage;

        if let Some(id) = application_id {
            let application = state
                .applications
                .get_mut(id)
                .expect("existence checked above");
            application.stage = stage;
        }

        Ok(())
    }

    fn save_interview_record(
        &self,
        record: InterviewRecord,
    ) -> Result<InterviewRecord, StoreError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        match state
            .interviews
            .iter_mut()
            .find(|existing| {
                existing.application_id == record.application_id && existing.round == record.round
            }) {
            Some(existing) => *existing = record.clone(),
            None => state.interviews.push(record.clone()),
        }
        Ok(record)
    }
}

/// Delegates reads to an inner store and refuses every write.
pub(super) struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub(super) fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

impl RecruitmentStore for ReadOnlyStore {
    fn insert_candidate(&self, _candidate: Candidate) -> Result<Candidate, StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        self.inner.fetch_candidate(id)
    }

    fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        self.inner.candidates()
    }

    fn insert_application(&self, _application: Application) -> Result<Application, StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn fetch_application(&self, id: &ApplicationId) -> Result<Option<Application>, StoreError> {
        self.inner.fetch_application(id)
    }

    fn insert_position(&self, _position: JobPosition) -> Result<JobPosition, StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn fetch_position(&self, id: &PositionId) -> Result<Option<JobPosition>, StoreError> {
        self.inner.fetch_position(id)
    }

    fn open_positions(&self) -> Result<Vec<JobPosition>, StoreError> {
        self.inner.open_positions()
    }

    fn save_candidate_score(
        &self,
        _candidate_id: &CandidateId,
        _application_id: Option<&ApplicationId>,
        _score: u8,
        _breakdown: &ScoreBreakdown,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn save_stage_transition(
        &self,
        _candidate_id: &CandidateId,
        _application_id: Option<&ApplicationId>,
        _stage: CandidateStage,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }

    fn save_interview_record(
        &self,
        _record: InterviewRecord,
    ) -> Result<InterviewRecord, StoreError> {
        Err(StoreError::Unavailable("read only".to_string()))
    }
}

pub(super) struct StubMatcher {
    breakdown: Mutex<ScoreBreakdown>,
}

impl StubMatcher {
    pub(super) fn new(breakdown: ScoreBreakdown) -> Self {
        Self {
            breakdown: Mutex::new(breakdown),
        }
    }

    pub(super) fn set(&self, breakdown: ScoreBreakdown) {
        *self.breakdown.lock().expect("matcher mutex poisoned") = breakdown;
    }
}

impl CandidateMatcher for StubMatcher {
    fn match_candidate(
        &self,
        _profile: &CandidateProfile,
        _requirements: &PositionRequirements,
    ) -> Result<ScoreBreakdown, MatcherError> {
        Ok(*self.breakdown.lock().expect("matcher mutex poisoned"))
    }
}

pub(super) struct FailingMatcher;

impl CandidateMatcher for FailingMatcher {
    fn match_candidate(
        &self,
        _profile: &CandidateProfile,
        _requirements: &PositionRequirements,
    ) -> Result<ScoreBreakdown, MatcherError> {
        Err(MatcherError::Unavailable("model endpoint offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl PipelineNotifier for MemoryNotifier {
    fn emit(&self, event: &PipelineEvent) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}

pub(super) struct FailingNotifier;

impl PipelineNotifier for FailingNotifier {
    fn emit(&self, _event: &PipelineEvent) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("webhook endpoint down".to_string()))
    }
}

pub(super) fn build_service() -> (
    RecruitingService<MemoryStore, StubMatcher, MemoryNotifier>,
    Arc<MemoryStore>,
    Arc<StubMatcher>,
    Arc<MemoryNotifier>,
) {
    let store = Arc::new(MemoryStore::default());
    let matcher = Arc::new(StubMatcher::new(breakdown()));
    let notifier = Arc::new(MemoryNotifier::default());
    let service = RecruitingService::new(store.clone(), matcher.clone(), notifier.clone());
    (service, store, matcher, notifier)
}
