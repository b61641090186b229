use serde::Serialize;

use super::domain::{Candidate, CandidateStage};

/// Candidate count for one stage, in pipeline order.
#[derive(Debug, Clone, Serialize)]
pub struct StageCountEntry {
    pub stage: CandidateStage,
    pub stage_label: &'static str,
    pub count: usize,
}

/// Stage-distribution summary backing the reporting surface.
///
/// Data only; rendering belongs to the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub stage_counts: Vec<StageCountEntry>,
    pub total_candidates: usize,
    pub active: usize,
    pub hired: usize,
    pub rejected: usize,
    pub scored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_fit_score: Option<u8>,
}

pub fn pipeline_report(candidates: &[Candidate]) -> PipelineReport {
    let stage_counts = CandidateStage::ordered()
        .into_iter()
        .map(|stage| StageCountEntry {
            stage,
            stage_label: stage.label(),
            count: candidates
                .iter()
                .filter(|candidate| candidate.stage == stage)
                .count(),
        })
        .collect();

    let hired = candidates
        .iter()
        .filter(|candidate| candidate.stage == CandidateStage::Hired)
        .count();
    let rejected = candidates
        .iter()
        .filter(|candidate| candidate.stage == CandidateStage::Rejected)
        .count();

    let scores: Vec<u32> = candidates
        .iter()
        .filter_map(|candidate| candidate.fit_score.map(u32::from))
        .collect();
    let average_fit_score = if scores.is_empty() {
        None
    } else {
        let sum: u32 = scores.iter().sum();
        Some(((sum + scores.len() as u32 / 2) / scores.len() as u32) as u8)
    };

    PipelineReport {
        stage_counts,
        total_candidates: candidates.len(),
        active: candidates.len() - hired - rejected,
        hired,
        rejected,
        scored: scores.len(),
        average_fit_score,
    }
}
