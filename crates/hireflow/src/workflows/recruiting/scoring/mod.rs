mod weights;

pub use weights::{FitWeights, FIT_WEIGHTS};

use super::domain::{CandidateId, JobPosition, PositionId, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Result of scoring one candidate against one resolved position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScoreOutcome {
    pub candidate_id: CandidateId,
    pub position_id: PositionId,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Resolution rule for the position a candidate is scored against.
///
/// The declared title is matched case-insensitively as a substring of the
/// open position titles; with no match (or no declared title) any open
/// position is acceptable. Returns `None` only when no position exists.
pub(crate) fn select_position<'a>(
    declared_title: Option<&str>,
    open: &'a [JobPosition],
) -> Option<&'a JobPosition> {
    if let Some(title) = declared_title {
        let needle = title.trim().to_lowercase();
        if !needle.is_empty() {
            if let Some(position) = open
                .iter()
                .find(|position| position.title.to_lowercase().contains(&needle))
            {
                return Some(position);
            }
        }
    }

    open.first()
}
