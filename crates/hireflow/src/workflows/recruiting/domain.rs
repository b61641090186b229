use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for formal applications to a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for open job positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionId(pub String);

/// Recruiting stage a candidate currently occupies.
///
/// `Hired` and `Rejected` are terminal in intent, but the machine accepts
/// transitions out of them; callers wanting stricter workflows can consult
/// [`CandidateStage::is_terminal`] before requesting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStage {
    Pending,
    Interested,
    Shortlist,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl CandidateStage {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Pending,
            Self::Interested,
            Self::Shortlist,
            Self::Screening,
            Self::Interview,
            Self::Offer,
            Self::Hired,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Interested => "Interested",
            Self::Shortlist => "Shortlist",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Hired | Self::Rejected)
    }

    /// Canonical mapping from any legacy status label to a stage.
    ///
    /// Stage values historically arrived as free-form strings from several UI
    /// entry points; everything is funneled through this table so the rest of
    /// the engine only ever sees the closed enum.
    pub fn from_label(raw: &str) -> Result<Self, ValidationError> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "pending" | "new" | "applied" => Ok(Self::Pending),
            "interested" | "interest" => Ok(Self::Interested),
            "shortlist" | "shortlisted" => Ok(Self::Shortlist),
            "screening" | "prescreening" | "prescreen" => Ok(Self::Screening),
            "interview" | "interviewing" | "interviewed" => Ok(Self::Interview),
            "offer" | "offered" => Ok(Self::Offer),
            "hired" => Ok(Self::Hired),
            "rejected" | "declined" => Ok(Self::Rejected),
            _ => Err(ValidationError::UnknownStage(raw.to_string())),
        }
    }
}

/// The four weighted sub-scores composing a fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience: u8,
    pub qualifications: u8,
    pub education: u8,
    pub skills: u8,
}

impl ScoreBreakdown {
    pub fn components(&self) -> [(&'static str, u8); 4] {
        [
            ("experience", self.experience),
            ("qualifications", self.qualifications),
            ("education", self.education),
            ("skills", self.skills),
        ]
    }

    /// Each sub-score must sit in [0,100] before it can be weighted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (component, value) in self.components() {
            if value > 100 {
                return Err(ValidationError::SubScoreOutOfRange { component, value });
            }
        }
        Ok(())
    }
}

/// Structured profile the external matcher scores against a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub years_experience: u8,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

/// Inbound intake payload used to create a candidate at the `Pending` stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateIntake {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub declared_position: Option<String>,
    pub profile: CandidateProfile,
}

/// A person moving through the recruiting pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub declared_position: Option<String>,
    pub profile: CandidateProfile,
    pub stage: CandidateStage,
    pub fit_score: Option<u8>,
    pub fit_breakdown: Option<ScoreBreakdown>,
}

/// Links a candidate to a specific position; mirrors the candidate's stage.
///
/// Uniqueness per (candidate, position) is not enforced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub candidate_id: CandidateId,
    pub position_id: PositionId,
    pub stage: CandidateStage,
    pub fit_score: Option<u8>,
    pub fit_breakdown: Option<ScoreBreakdown>,
    pub submitted_at: DateTime<Utc>,
}

/// Requirements the matcher scores a candidate profile against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionRequirements {
    pub required_skills: Vec<String>,
    pub minimum_years: u8,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

/// An advertised job opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosition {
    pub id: PositionId,
    pub title: String,
    pub department: String,
    pub open: bool,
    pub requirements: PositionRequirements,
}

/// Named interview occurrence within one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewRound {
    PreScreen,
    First,
    Final,
}

impl InterviewRound {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreScreen => "Pre-Screen",
            Self::First => "First Interview",
            Self::Final => "Final Interview",
        }
    }

    /// Which role conducts the round by default.
    pub const fn default_evaluator(self) -> EvaluatorRole {
        match self {
            Self::PreScreen => EvaluatorRole::Hr,
            Self::First => EvaluatorRole::Manager,
            Self::Final => EvaluatorRole::IsTeam,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorRole {
    Hr,
    Manager,
    IsTeam,
}

impl EvaluatorRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::Manager => "Manager",
            Self::IsTeam => "IS Team",
        }
    }
}

/// Seven per-criterion scores, each constrained to [1,10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaScores {
    pub skill_knowledge: u8,
    pub communication: u8,
    pub creativity: u8,
    pub motivation: u8,
    pub teamwork: u8,
    pub analytical: u8,
    pub culture_fit: u8,
}

impl CriteriaScores {
    pub fn criteria(&self) -> [(&'static str, u8); 7] {
        [
            ("skill_knowledge", self.skill_knowledge),
            ("communication", self.communication),
            ("creativity", self.creativity),
            ("motivation", self.motivation),
            ("teamwork", self.teamwork),
            ("analytical", self.analytical),
            ("culture_fit", self.culture_fit),
        ]
    }

    pub fn total(&self) -> u8 {
        self.criteria().into_iter().map(|(_, value)| value).sum()
    }
}

/// One interview occurrence: created when scheduled, updated when scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewRecord {
    pub application_id: ApplicationId,
    pub round: InterviewRound,
    pub evaluator: EvaluatorRole,
    pub scheduled_at: DateTime<Utc>,
    pub feedback: Option<String>,
    pub criteria: Option<CriteriaScores>,
    pub total_score: Option<u8>,
    pub passed: Option<bool>,
}

/// Write-once record of one stage transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineEvent {
    pub candidate_id: CandidateId,
    pub from_stage: CandidateStage,
    pub to_stage: CandidateStage,
    pub occurred_at: DateTime<Utc>,
    pub actor: String,
    pub description: String,
}

/// Malformed input rejected at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("criterion {criterion} must be between 1 and 10, got {value}")]
    CriterionOutOfRange { criterion: &'static str, value: u8 },
    #[error("sub-score {component} must be between 0 and 100, got {value}")]
    SubScoreOutOfRange { component: &'static str, value: u8 },
    #[error("unknown pipeline stage label '{0}'")]
    UnknownStage(String),
}
