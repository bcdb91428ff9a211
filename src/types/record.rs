// src/types/record.rs
use super::job::JobWithSkills;
use serde::{Deserialize, Serialize};

pub const ANALYSIS_METHOD: &str = "strict_location_filtering";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFilterStats {
    pub total_scraped: usize,
    pub location_filtered: usize,
    pub rejected_count: usize,
    pub filter_success_rate: String,
}

impl LocationFilterStats {
    pub fn new(total_scraped: usize, location_filtered: usize) -> Self {
        let rate = location_filtered as f64 / total_scraped.max(1) as f64 * 100.0;
        Self {
            total_scraped,
            location_filtered,
            rejected_count: total_scraped.saturating_sub(location_filtered),
            filter_success_rate: format!("{:.1}%", rate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_jobs: usize,
    pub total_skills: usize,
    pub analysis_timestamp: String,
    pub method: String,
}

/// The persisted outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub job_category: String,
    pub location: String,
    pub date_filter: String,
    pub jobs_with_skills: Vec<JobWithSkills>,
    pub extracted_skills: Vec<String>,
    pub location_filter_stats: LocationFilterStats,
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_stats_rate() {
        let stats = LocationFilterStats::new(8, 3);
        assert_eq!(stats.rejected_count, 5);
        assert_eq!(stats.filter_success_rate, "37.5%");
    }

    #[test]
    fn test_filter_stats_empty_scrape() {
        let stats = LocationFilterStats::new(0, 0);
        assert_eq!(stats.rejected_count, 0);
        assert_eq!(stats.filter_success_rate, "0.0%");
    }
}
