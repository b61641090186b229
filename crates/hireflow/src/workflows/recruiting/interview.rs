use super::domain::{CriteriaScores, InterviewRecord, ValidationError};
use serde::{Deserialize, Serialize};

pub const CRITERION_MIN: u8 = 1;
pub const CRITERION_MAX: u8 = 10;
pub const PASS_THRESHOLD: u8 = 50;
pub const RESERVE_THRESHOLD: u8 = 45;

/// Qualitative classification of an interview total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationBand {
    Pass,
    Reserve,
    Fail,
}

impl EvaluationBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Reserve => "Reserve",
            Self::Fail => "Fail",
        }
    }

    fn for_total(total: u8) -> Self {
        if total >= PASS_THRESHOLD {
            Self::Pass
        } else if total >= RESERVE_THRESHOLD {
            Self::Reserve
        } else {
            Self::Fail
        }
    }
}

/// Aggregated outcome for a single round/evaluator.
///
/// `reserve` is a reporting distinction only: the stored boolean collapses it
/// into `passed = total >= 50`. Both fields are surfaced so the caller decides
/// what a borderline result means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewEvaluation {
    pub total: u8,
    pub band: EvaluationBand,
    pub passed: bool,
}

/// Convert seven raw criterion scores into a total and verdict.
///
/// Pure; persisting the interview record and deciding whether the outcome
/// drives a pipeline transition are the caller's responsibility.
pub fn evaluate(criteria: &CriteriaScores) -> Result<InterviewEvaluation, ValidationError> {
    for (criterion, value) in criteria.criteria() {
        if !(CRITERION_MIN..=CRITERION_MAX).contains(&value) {
            return Err(ValidationError::CriterionOutOfRange { criterion, value });
        }
    }

    let total = criteria.total();
    Ok(InterviewEvaluation {
        total,
        band: EvaluationBand::for_total(total),
        passed: total >= PASS_THRESHOLD,
    })
}

/// A persisted interview record together with its computed evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredInterview {
    pub record: InterviewRecord,
    pub evaluation: InterviewEvaluation,
}
