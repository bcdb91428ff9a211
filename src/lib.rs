pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod core;
pub mod environment;
pub mod error;
pub mod job_source;
pub mod pipeline;
pub mod skills;
pub mod storage;
pub mod types;
pub mod utils;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use catalog::DateFilter;
pub use error::PipelineError;
pub use pipeline::{AnalysisOutcome, AnalysisRequest, SkillsWorkflow};
pub use types::{AnalysisRecord, JobPosting, JobWithSkills, SkillsSource};
pub use web::start_web_server;
