// src/error.rs
use thiserror::Error;

/// Conditions that stop a pipeline run. Every other failure is recorded in
/// the run's error list and the run carries on.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No search keywords found for job category: {category}")]
    Configuration { category: String },

    #[error("Failed to save analysis results '{name}': {message}")]
    Persistence { name: String, message: String },
}

impl PipelineError {
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::Configuration { .. } => "CONFIGURATION_ERROR",
            PipelineError::Persistence { .. } => "PERSISTENCE_ERROR",
        }
    }
}
