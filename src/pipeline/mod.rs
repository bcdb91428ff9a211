// src/pipeline/mod.rs
//! Search → FilterLocation → Infer → Save → Done

pub mod dedupe;
pub mod location_filter;
pub mod orchestrator;
pub mod state;

pub use dedupe::dedupe;
pub use location_filter::{FilterOutcome, MatchRule};
pub use orchestrator::{AnalysisOutcome, SkillsWorkflow, WorkflowSettings, MAX_SEARCH_KEYWORDS};
pub use state::{AnalysisRequest, PipelineStage, RunState};
