// src/catalog/job_keywords.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub struct JobCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const JOB_CATEGORIES: &[JobCategory] = &[
    JobCategory {
        name: "AI ENGINEER",
        description: "AI Engineering roles including ML, NLP, Computer Vision, and AI Operations",
        keywords: &[
            "AI Engineer",
            "Artificial Intelligence Engineer",
            "Machine Learning Engineer",
            "ML Engineer",
            "AI Developer",
            "AI Specialist",
            "AI Researcher",
            "NLP Engineer",
            "Computer Vision Engineer",
            "Deep Learning Engineer",
            "Neural Network Engineer",
            "LLM Engineer",
            "Generative AI Engineer",
            "MLOps Engineer",
            "LLMOps Engineer",
            "AI Platform Engineer",
            "ML Infrastructure Engineer",
            "AI Systems Engineer",
            "Applied AI Scientist",
            "AI Research Engineer",
            "Machine Learning Scientist",
            "AI Solutions Engineer",
            "Conversational AI Engineer",
            "Prompt Engineer",
            "RAG Engineer",
            "Foundation Model Engineer",
            "AI Product Manager",
            "AI Architect",
        ],
    },
    JobCategory {
        name: "DATA SCIENCE ENGINEER",
        description: "Data Science and Analytics roles including engineering and analysis",
        keywords: &[
            "Data Scientist",
            "Senior Data Scientist",
            "Principal Data Scientist",
            "Data Science Engineer",
            "Applied Data Scientist",
            "Research Data Scientist",
            "Data Analyst",
            "Senior Data Analyst",
            "Business Intelligence Analyst",
            "Analytics Engineer",
            "Quantitative Analyst",
            "Statistical Analyst",
            "Data Engineer",
            "Big Data Engineer",
            "Data Platform Engineer",
            "Data Infrastructure Engineer",
            "ETL Developer",
            "Data Architect",
            "Biostatistician",
            "Econometrician",
            "Operations Research Analyst",
            "Data Mining Engineer",
            "Predictive Analytics Engineer",
            "BI Developer",
            "BI Analyst",
            "Business Data Analyst",
            "Reporting Analyst",
            "Insights Analyst",
        ],
    },
    JobCategory {
        name: "PYTHON DEVELOPER",
        description: "Python development roles across web, backend, and specialized applications",
        keywords: &[
            "Python Developer",
            "Senior Python Developer",
            "Python Engineer",
            "Python Software Engineer",
            "Full Stack Python Developer",
            "Django Developer",
            "Flask Developer",
            "FastAPI Developer",
            "Python Web Developer",
            "Backend Python Developer",
            "Python/React Developer",
            "Python/JavaScript Developer",
            "Python Full Stack Engineer",
            "Python API Developer",
            "Python Automation Engineer",
            "Python DevOps Engineer",
            "Python Cloud Engineer",
            "Python Microservices Developer",
            "Python Fintech Developer",
            "Python Game Developer",
            "Python Desktop Application Developer",
            "Python Mobile Backend Developer",
        ],
    },
];

pub fn find_category(name: &str) -> Option<&'static JobCategory> {
    JOB_CATEGORIES.iter().find(|category| category.name == name)
}

/// Search keywords for a category; empty for unknown categories.
pub fn search_keywords(category: &str) -> Vec<String> {
    find_category(category)
        .map(|c| c.keywords.iter().map(|k| k.to_string()).collect())
        .unwrap_or_default()
}

/// Posting recency window accepted by the job search. Deserializing an
/// unknown label yields the default window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DateFilter {
    #[serde(rename = "Today")]
    Today,
    #[default]
    #[serde(rename = "Last Week")]
    LastWeek,
    #[serde(rename = "Last 2 Weeks")]
    Last2Weeks,
    #[serde(rename = "Last 3 Weeks")]
    Last3Weeks,
    #[serde(rename = "Last Month")]
    LastMonth,
}

impl DateFilter {
    pub const ALL: [DateFilter; 5] = [
        DateFilter::Today,
        DateFilter::LastWeek,
        DateFilter::Last2Weeks,
        DateFilter::Last3Weeks,
        DateFilter::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Today => "Today",
            DateFilter::LastWeek => "Last Week",
            DateFilter::Last2Weeks => "Last 2 Weeks",
            DateFilter::Last3Weeks => "Last 3 Weeks",
            DateFilter::LastMonth => "Last Month",
        }
    }

    /// LinkedIn `f_TPR` parameter value.
    pub fn code(&self) -> &'static str {
        match self {
            DateFilter::Today => "r86400",
            DateFilter::LastWeek => "r604800",
            DateFilter::Last2Weeks => "r1209600",
            DateFilter::Last3Weeks => "r1814400",
            DateFilter::LastMonth => "r2592000",
        }
    }

    /// Lenient lookup used for stored labels; unknown labels mean last week.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl From<String> for DateFilter {
    fn from(label: String) -> Self {
        DateFilter::from_label(&label)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', '_'], " ");
        DateFilter::ALL
            .into_iter()
            .find(|filter| filter.label().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown date filter '{}'. Use one of: {}",
                    s,
                    DateFilter::ALL.map(|f| f.label()).join(", ")
                )
            })
    }
}
