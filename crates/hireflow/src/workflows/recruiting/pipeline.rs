use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Candidate, CandidateStage, PipelineEvent};

/// Build the event for moving a candidate to `to_stage`.
///
/// Returns `None` when the target matches the current stage; that request is
/// a no-op and must produce no event. No legal-transition graph is enforced
/// beyond this rule: any other target stage is accepted, including moves out
/// of `Hired`/`Rejected`.
pub fn plan_transition(
    candidate: &Candidate,
    to_stage: CandidateStage,
    actor: &str,
    occurred_at: DateTime<Utc>,
) -> Option<PipelineEvent> {
    let from_stage = candidate.stage;
    if from_stage == to_stage {
        return None;
    }

    Some(PipelineEvent {
        candidate_id: candidate.id.clone(),
        from_stage,
        to_stage,
        occurred_at,
        actor: actor.to_string(),
        description: format!(
            "{} moved from {} to {}",
            candidate.name,
            from_stage.label(),
            to_stage.label()
        ),
    })
}

/// Five-step progress indicator shown alongside the full stage list.
///
/// Display-only derived sequence, never a second source of truth: selecting a
/// step resolves to a canonical stage and goes through the same transition
/// mechanism as any other stage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    PreScreening,
    Interview1,
    Interview2,
    Offer,
    Hired,
}

impl PipelineStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PreScreening,
            Self::Interview1,
            Self::Interview2,
            Self::Offer,
            Self::Hired,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PreScreening => "pre_screening",
            Self::Interview1 => "interview_1",
            Self::Interview2 => "interview_2",
            Self::Offer => "offer",
            Self::Hired => "hired",
        }
    }

    /// Canonical stage a step resolves to. Both interview steps land on the
    /// single `Interview` stage.
    pub const fn stage(self) -> CandidateStage {
        match self {
            Self::PreScreening => CandidateStage::Screening,
            Self::Interview1 | Self::Interview2 => CandidateStage::Interview,
            Self::Offer => CandidateStage::Offer,
            Self::Hired => CandidateStage::Hired,
        }
    }

    /// The step highlighted for a given stage, when the stage appears in the
    /// indicator at all.
    pub const fn for_stage(stage: CandidateStage) -> Option<Self> {
        match stage {
            CandidateStage::Screening => Some(Self::PreScreening),
            CandidateStage::Interview => Some(Self::Interview1),
            CandidateStage::Offer => Some(Self::Offer),
            CandidateStage::Hired => Some(Self::Hired),
            _ => None,
        }
    }
}
