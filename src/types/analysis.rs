// src/types/analysis.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillFrequencyEntry {
    pub skill: String,
    pub frequency: usize,
    pub percentage: f64,
}

/// Unordered skill pair; the two names are stored in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCombination {
    pub skills: [String; 2],
    pub frequency: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategoryGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    pub total_companies: usize,
    pub top_companies: Vec<NamedCount>,
    pub unique_companies: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAnalysis {
    pub total_locations: usize,
    pub top_locations: Vec<NamedCount>,
    pub geographic_distribution: Vec<NamedCount>,
}

/// Metrics computed over skill-bearing jobs only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCoverage {
    pub jobs_with_skills: usize,
    pub average_skills_per_job: f64,
    pub analyzed_share: f64,
    pub unique_companies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub skill_frequencies: Vec<SkillFrequencyEntry>,
    pub skill_categories: Vec<SkillCategoryGroup>,
    pub skill_combinations: Vec<SkillCombination>,
    pub companies: CompanyAnalysis,
    pub locations: LocationAnalysis,
    pub coverage: SkillCoverage,
}
