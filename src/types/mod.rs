// src/types/mod.rs
pub mod analysis;
pub mod job;
pub mod record;

pub use analysis::*;
pub use job::{JobPosting, JobWithSkills, SkillsSource};
pub use record::{AnalysisRecord, LocationFilterStats, RunSummary, ANALYSIS_METHOD};
