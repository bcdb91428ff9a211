// src/types/job.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_SOURCE: &str = "LinkedIn";

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// A raw posting as returned by a job source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub search_keyword: String,
    pub scraped_at: DateTime<Utc>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl JobPosting {
    pub fn new(title: &str, company: &str, location: &str, search_keyword: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            search_keyword: search_keyword.to_string(),
            scraped_at: Utc::now(),
            source: default_source(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Dedup identity: lowercased title and company. Location is not part of it,
    /// so the same role at two offices of one company collapses into one posting.
    pub fn identity_key(&self) -> String {
        format!("{}_{}", self.title.to_lowercase(), self.company.to_lowercase())
    }

    /// False when title or company is blank; such postings have no usable identity.
    pub fn has_identity(&self) -> bool {
        !self.title.trim().is_empty() && !self.company.trim().is_empty()
    }
}

/// Provenance of a job's skill set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillsSource {
    #[serde(rename = "inferred")]
    Inferred,
    #[serde(rename = "inferred + ai_enhanced")]
    AiEnhanced,
    #[serde(rename = "error")]
    Error,
}

impl SkillsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillsSource::Inferred => "inferred",
            SkillsSource::AiEnhanced => "inferred + ai_enhanced",
            SkillsSource::Error => "error",
        }
    }
}

/// A posting annotated with its skills. `skills_count` always equals the
/// number of distinct skills; both are only set through [`JobWithSkills::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredJobWithSkills")]
pub struct JobWithSkills {
    #[serde(flatten)]
    pub job: JobPosting,
    skills: Vec<String>,
    pub skills_source: SkillsSource,
    skills_count: usize,
}

impl JobWithSkills {
    pub fn new(job: JobPosting, skills: Vec<String>, skills_source: SkillsSource) -> Self {
        let mut seen = HashSet::new();
        let skills: Vec<String> = skills
            .into_iter()
            .filter(|skill| seen.insert(skill.clone()))
            .collect();
        let skills_count = skills.len();

        Self {
            job,
            skills,
            skills_source,
            skills_count,
        }
    }

    pub fn failed(job: JobPosting) -> Self {
        Self::new(job, Vec::new(), SkillsSource::Error)
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn skills_count(&self) -> usize {
        self.skills_count
    }

    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}

impl PartialEq for JobWithSkills {
    fn eq(&self, other: &Self) -> bool {
        let ours: HashSet<&String> = self.skills.iter().collect();
        let theirs: HashSet<&String> = other.skills.iter().collect();
        self.job == other.job && self.skills_source == other.skills_source && ours == theirs
    }
}

// Stored records may carry a stale count; it is recomputed on load.
#[derive(Deserialize)]
struct StoredJobWithSkills {
    #[serde(flatten)]
    job: JobPosting,
    #[serde(default)]
    skills: Vec<String>,
    skills_source: SkillsSource,
}

impl From<StoredJobWithSkills> for JobWithSkills {
    fn from(stored: StoredJobWithSkills) -> Self {
        JobWithSkills::new(stored.job, stored.skills, stored.skills_source)
    }
}
