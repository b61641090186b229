use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use hireflow::workflows::recruiting::{
    Application, ApplicationId, Candidate, CandidateId, CandidateMatcher, CandidateProfile,
    CandidateStage, InterviewRecord, JobPosition, MatcherError, NotifyError, PipelineEvent,
    PipelineNotifier, PositionId, PositionRequirements, RecruitmentStore, ScoreBreakdown,
    StoreError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct StoreState {
    candidates: HashMap<CandidateId, Candidate>,
    applications: HashMap<ApplicationId, Application>,
    positions: Vec<JobPosition>,
    interviews: Vec<InterviewRecord>,
}

/// In-memory store backing local serving and the CLI demo. A single mutex
/// over the whole state gives each trait call the required atomicity.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecruitmentStore {
    state: Arc<Mutex<StoreState>>,
}

impl RecruitmentStore for InMemoryRecruitmentStore {
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
        match state.interviews.iter_mut().find(|existing| {
            existing.application_id == record.application_id && existing.round == record.round
        }) {
            Some(existing) => *existing = record.clone(),
            None => state.interviews.push(record.clone()),
        }
        Ok(record)
    }
}

/// Collects pipeline events in memory; stands in for e-mail or websocket
/// delivery during local serving and demos.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPipelineNotifier {
    events: Arc<Mutex<Vec<PipelineEvent>>>,
}

impl InMemoryPipelineNotifier {
    pub(crate) fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl PipelineNotifier for InMemoryPipelineNotifier {
    fn emit(&self, event: &PipelineEvent) -> Result<(), NotifyError> {
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(event.clone());
        Ok(())
    }
}

/// Deterministic rule-based matcher: scores each sub-dimension from the
/// overlap between the candidate profile and the position requirements.
#[derive(Default, Clone)]
pub(crate) struct HeuristicMatcher;

impl CandidateMatcher for HeuristicMatcher {
    fn match_candidate(
        &self,
        profile: &CandidateProfile,
        requirements: &PositionRequirements,
    ) -> Result<ScoreBreakdown, MatcherError> {
        Ok(ScoreBreakdown {
            experience: experience_score(profile.years_experience, requirements.minimum_years),
            qualifications: overlap_score(&profile.certifications, &requirements.certifications),
            education: overlap_score(&profile.education, &requirements.education),
            skills: overlap_score(&profile.skills, &requirements.required_skills),
        })
    }
}

fn experience_score(years: u8, minimum: u8) -> u8 {
    if minimum == 0 {
        return 80;
    }
    (u32::from(years) * 100 / u32::from(minimum)).min(100) as u8
}

fn overlap_score(offered: &[String], required: &[String]) -> u8 {
    if required.is_empty() {
        return 75;
    }
    let matched = required
        .iter()
        .filter(|requirement| {
            offered.iter().any(|item| {
                item.to_lowercase().contains(&requirement.to_lowercase())
            })
        })
        .count();
    (matched * 100 / required.len()) as u8
}
