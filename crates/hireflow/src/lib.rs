//! Rule engine for the candidate recruiting pipeline.
//!
//! The heart of the crate lives in [`workflows::recruiting`]: a weighted
//! fit-score engine, an interview evaluation aggregator, and the pipeline
//! state machine that moves candidates between recruiting stages. Persistence,
//! matching, and notification are collaborator traits so the rules can be
//! exercised against in-memory doubles or a real backend.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
