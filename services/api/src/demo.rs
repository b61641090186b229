use crate::infra::{HeuristicMatcher, InMemoryPipelineNotifier, InMemoryRecruitmentStore};
use chrono::Utc;
use clap::Args;
use std::sync::Arc;

use hireflow::error::AppError;
use hireflow::workflows::recruiting::{
    CandidateIntake, CandidateProfile, CandidateStage, CriteriaScores, InterviewRound,
    JobPosition, PositionId, PositionRequirements, RecruitingService, RecruitingServiceError,
    RecruitmentStore,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Actor recorded on each stage transition
    #[arg(long, default_value = "demo-recruiter")]
    pub(crate) actor: String,
    /// Print every emitted pipeline event at the end of the run
    #[arg(long)]
    pub(crate) list_events: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryRecruitmentStore::default());
    let notifier = Arc::new(InMemoryPipelineNotifier::default());
    let service = RecruitingService::new(store.clone(), Arc::new(HeuristicMatcher), notifier.clone());

    println!("Candidate pipeline demo");

    store
        .insert_position(backend_position())
        .map_err(RecruitingServiceError::from)?;
    store
        .insert_position(analyst_position())
        .map_err(RecruitingServiceError::from)?;
    println!("- Seeded 2 open positions");

    let candidate = service.register_candidate(sample_intake())?;
    println!(
        "- Registered {} ({}) at stage {}",
        candidate.name,
        candidate.id.0,
        candidate.stage.label()
    );

    let application =
        service.submit_application(&candidate.id, &PositionId("pos-backend".to_string()), Utc::now())?;
    println!("- Opened application {}", application.id.0);

    let outcome = service.compute_fit_score(&candidate.id, None, Some(&application.id))?;
    println!("- Fit score {} against {}", outcome.score, outcome.position_id.0);
    for (component, value) in outcome.breakdown.components() {
        println!("    - {component}: {value}");
    }

    service.schedule_interview(&application.id, InterviewRound::First, Utc::now())?;
    let first = service.evaluate_interview(
        &application.id,
        InterviewRound::First,
        strong_criteria(),
        Some("Confident on systems design".to_string()),
        Utc::now(),
    )?;
    println!(
        "- First interview: total {} -> {} (passed: {})",
        first.evaluation.total,
        first.evaluation.band.label(),
        first.evaluation.passed
    );

    let last = service.evaluate_interview(
        &application.id,
        InterviewRound::Final,
        borderline_criteria(),
        None,
        Utc::now(),
    )?;
    println!(
        "- Final interview: total {} -> {} (passed: {})",
        last.evaluation.total,
        last.evaluation.band.label(),
        last.evaluation.passed
    );

    for stage in [
        CandidateStage::Shortlist,
        CandidateStage::Interview,
        CandidateStage::Offer,
        CandidateStage::Hired,
    ] {
        if let Some(event) =
            service.transition_stage(&candidate.id, stage, &args.actor, Some(&application.id))?
        {
            println!("- {}", event.description);
        }
    }

    let report = service.pipeline_report()?;
    println!("\nPipeline summary");
    for entry in &report.stage_counts {
        if entry.count > 0 {
            println!("- {}: {}", entry.stage_label, entry.count);
        }
    }
    println!(
        "- {} candidate(s) total, {} hired, {} rejected",
        report.total_candidates, report.hired, report.rejected
    );
    if let Some(average) = report.average_fit_score {
        println!("- Average fit score: {average}");
    }

    if args.list_events {
        println!("\nEmitted events");
        for event in notifier.events() {
            match serde_json::to_string(&event) {
                Ok(json) => println!("- {json}"),
                Err(err) => println!("- event unavailable: {err}"),
            }
        }
    }

    Ok(())
}

fn backend_position() -> JobPosition {
    JobPosition {
        id: PositionId("pos-backend".to_string()),
        title: "Backend Engineer".to_string(),
        department: "Engineering".to_string(),
        open: true,
        requirements: PositionRequirements {
            required_skills: vec!["Rust".to_string(), "SQL".to_string(), "Kubernetes".to_string()],
            minimum_years: 4,
            education: vec!["Computer Science".to_string()],
            certifications: vec!["CKA".to_string()],
        },
    }
}

fn analyst_position() -> JobPosition {
    JobPosition {
        id: PositionId("pos-analyst".to_string()),
        title: "Data Analyst".to_string(),
        department: "Operations".to_string(),
        open: true,
        requirements: PositionRequirements {
            required_skills: vec!["SQL".to_string(), "Python".to_string()],
            minimum_years: 2,
            education: vec!["Statistics".to_string()],
            certifications: vec![],
        },
    }
}

fn sample_intake() -> CandidateIntake {
    CandidateIntake {
        name: "Jordan Alvarez".to_string(),
        email: "jordan.alvarez@example.com".to_string(),
        phone: Some("+1-515-555-0117".to_string()),
        declared_position: Some("Backend Engineer".to_string()),
        profile: CandidateProfile {
            years_experience: 6,
            skills: vec!["Rust".to_string(), "SQL".to_string(), "Kubernetes".to_string()],
            education: vec!["BSc Computer Science".to_string()],
            certifications: vec!["CKA".to_string()],
        },
    }
}

fn strong_criteria() -> CriteriaScores {
    CriteriaScores {
        skill_knowledge: 9,
        communication: 8,
        creativity: 7,
        motivation: 8,
        teamwork: 8,
        analytical: 9,
        culture_fit: 8,
    }
}

fn borderline_criteria() -> CriteriaScores {
    CriteriaScores {
        skill_knowledge: 7,
        communication: 7,
        creativity: 7,
        motivation: 7,
        teamwork: 7,
        analytical: 7,
        culture_fit: 7,
    }
}
