// src/pipeline/state.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::{search_keywords, DateFilter};
use crate::types::{
    AnalysisRecord, JobPosting, JobWithSkills, LocationFilterStats, RunSummary, ANALYSIS_METHOD,
};

/// Linear stage progression of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    Search,
    FilterLocation,
    Infer,
    Save,
    Done,
}

impl PipelineStage {
    pub fn next(self) -> Self {
        match self {
            PipelineStage::Search => PipelineStage::FilterLocation,
            PipelineStage::FilterLocation => PipelineStage::Infer,
            PipelineStage::Infer => PipelineStage::Save,
            PipelineStage::Save | PipelineStage::Done => PipelineStage::Done,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Search => "search",
            PipelineStage::FilterLocation => "filter_location",
            PipelineStage::Infer => "infer",
            PipelineStage::Save => "save",
            PipelineStage::Done => "done",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub job_category: String,
    pub location: String,
    #[serde(default)]
    pub date_filter: DateFilter,
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

impl AnalysisRequest {
    /// Request whose keywords come from the job category catalog.
    pub fn for_category(job_category: &str, location: &str, date_filter: DateFilter) -> Self {
        Self {
            job_category: job_category.to_string(),
            location: location.to_string(),
            date_filter,
            search_keywords: search_keywords(job_category),
        }
    }
}

/// Mutable record threaded through the stages of a single run.
#[derive(Debug, Clone, Serialize)]
pub struct RunState {
    pub run_id: Uuid,
    pub stage: PipelineStage,
    pub job_category: String,
    pub location: String,
    pub date_filter: DateFilter,
    pub search_keywords: Vec<String>,
    pub raw_jobs: Vec<JobPosting>,
    pub filtered_jobs: Vec<JobPosting>,
    pub extracted_skills: BTreeSet<String>,
    pub jobs_with_skills: Vec<JobWithSkills>,
    error_messages: Vec<String>,
    pub current_step: String,
}

impl RunState {
    pub fn new(request: AnalysisRequest) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            stage: PipelineStage::Search,
            job_category: request.job_category,
            location: request.location,
            date_filter: request.date_filter,
            search_keywords: request.search_keywords,
            raw_jobs: Vec::new(),
            filtered_jobs: Vec::new(),
            extracted_skills: BTreeSet::new(),
            jobs_with_skills: Vec::new(),
            error_messages: Vec::new(),
            current_step: "Starting...".to_string(),
        }
    }

    pub fn advance(&mut self) {
        self.stage = self.stage.next();
    }

    pub fn set_step(&mut self, step: impl Into<String>) {
        self.current_step = step.into();
        debug!("{}", self.current_step);
    }

    /// Errors are append-only for the lifetime of the run.
    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.error_messages.push(message);
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }

    pub fn extracted_skills_sorted(&self) -> Vec<String> {
        self.extracted_skills.iter().cloned().collect()
    }

    pub fn to_record(&self, timestamp: &str) -> AnalysisRecord {
        AnalysisRecord {
            job_category: self.job_category.clone(),
            location: self.location.clone(),
            date_filter: self.date_filter.label().to_string(),
            jobs_with_skills: self.jobs_with_skills.clone(),
            extracted_skills: self.extracted_skills_sorted(),
            location_filter_stats: LocationFilterStats::new(
                self.raw_jobs.len(),
                self.filtered_jobs.len(),
            ),
            summary: RunSummary {
                total_jobs: self.jobs_with_skills.len(),
                total_skills: self.extracted_skills.len(),
                analysis_timestamp: timestamp.to_string(),
                method: ANALYSIS_METHOD.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillsSource;

    #[test]
    fn test_stage_progression() {
        let mut stage = PipelineStage::Search;
        let mut seen = vec![stage];
        while stage != PipelineStage::Done {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                PipelineStage::Search,
                PipelineStage::FilterLocation,
                PipelineStage::Infer,
                PipelineStage::Save,
                PipelineStage::Done,
            ]
        );
        assert_eq!(PipelineStage::Done.next(), PipelineStage::Done);
    }

    #[test]
    fn test_request_for_category_loads_keywords() {
        let request =
            AnalysisRequest::for_category("PYTHON DEVELOPER", "Remote", DateFilter::Today);
        assert_eq!(request.search_keywords[0], "Python Developer");
        assert!(AnalysisRequest::for_category("CHEF", "Remote", DateFilter::Today)
            .search_keywords
            .is_empty());
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = RunState::new(AnalysisRequest::for_category(
            "AI ENGINEER",
            "Sri Lanka",
            DateFilter::LastWeek,
        ));
        assert_eq!(state.stage, PipelineStage::Search);
        assert!(state.raw_jobs.is_empty());
        assert!(state.error_messages().is_empty());
        assert_eq!(state.current_step, "Starting...");
    }

    #[test]
    fn test_to_record() {
        let mut state = RunState::new(AnalysisRequest::for_category(
            "AI ENGINEER",
            "Sri Lanka",
            DateFilter::LastMonth,
        ));
        let job = JobPosting::new("AI Engineer", "Acme", "Colombo", "AI Engineer");
        state.raw_jobs = vec![job.clone(), JobPosting::new("X", "Y", "London", "AI Engineer")];
        state.filtered_jobs = vec![job.clone()];
        state.jobs_with_skills = vec![JobWithSkills::new(
            job,
            vec!["SQL".into(), "Python".into()],
            SkillsSource::Inferred,
        )];
        state.extracted_skills.extend(["SQL".to_string(), "Python".to_string()]);

        let record = state.to_record("20250101_120000");

        assert_eq!(record.date_filter, "Last Month");
        assert_eq!(record.extracted_skills, vec!["Python", "SQL"]);
        assert_eq!(record.location_filter_stats.rejected_count, 1);
        assert_eq!(record.location_filter_stats.filter_success_rate, "50.0%");
        assert_eq!(record.summary.total_jobs, 1);
        assert_eq!(record.summary.total_skills, 2);
        assert_eq!(record.summary.method, "strict_location_filtering");
    }
}
