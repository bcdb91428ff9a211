// src/skills/inference.rs
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::response::{build_enhancement_prompt, parse_skill_list};
use crate::catalog::skills_db::{CORE_SKILLS, SKILLS_DATABASE, TITLE_TRIGGERS};
use crate::catalog::{category_skills, CategorySkills, TriggerSkills};
use crate::core::TextGenerator;
use crate::types::{JobPosting, JobWithSkills, SkillsSource};

const CORE_SKILL_LIMIT: usize = 5;

/// Rule-based skills for a posting: the leading core skills of its category
/// plus every title trigger found in the lowercased title.
pub fn infer_base_skills(
    job: &JobPosting,
    category: &str,
    skills_db: &[CategorySkills],
) -> Vec<String> {
    let title = job.title.to_lowercase();
    let category_entry = category_skills(skills_db, category);
    let mut skills: Vec<&str> = Vec::new();

    if let Some(entry) = category_entry {
        skills.extend(entry.list(CORE_SKILLS).iter().take(CORE_SKILL_LIMIT));
    }

    for trigger in TITLE_TRIGGERS {
        if !title.contains(trigger.keyword) {
            continue;
        }
        match &trigger.skills {
            TriggerSkills::Fixed(fixed) => skills.extend(fixed.iter()),
            TriggerSkills::FromCategory { list, take } => {
                if let Some(entry) = category_entry {
                    skills.extend(entry.list(list).iter().take(*take));
                }
            }
        }
    }

    union(skills.into_iter().map(str::to_string), std::iter::empty())
}

/// Order-preserving union without duplicates.
fn union(
    first: impl IntoIterator<Item = String>,
    second: impl IntoIterator<Item = String>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    first
        .into_iter()
        .chain(second)
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}

pub struct SkillInferenceEngine {
    skills_db: &'static [CategorySkills],
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SkillInferenceEngine {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            skills_db: SKILLS_DATABASE,
            generator,
        }
    }

    pub fn rules_only() -> Self {
        Self::new(None)
    }

    /// Name of the configured text generator, if enhancement is on.
    pub fn enhancer_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|generator| generator.name())
    }

    pub fn infer_base_skills(&self, job: &JobPosting, category: &str) -> Vec<String> {
        infer_base_skills(job, category, self.skills_db)
    }

    /// Asks the text generator for three extra skills. Never fails: any
    /// transport or parse problem is logged and yields no extra skills.
    pub async fn enhance(&self, job: &JobPosting, base_skills: &[String]) -> Vec<String> {
        let Some(generator) = &self.generator else {
            return Vec::new();
        };

        let prompt = build_enhancement_prompt(job, base_skills);
        match generator.generate(&prompt).await {
            Ok(response) => parse_skill_list(&response).unwrap_or_else(|| {
                warn!(
                    "AI enhancement returned unparseable content for '{}': {}",
                    job.title, response
                );
                Vec::new()
            }),
            Err(e) => {
                warn!("AI enhancement failed for '{}': {:#}", job.title, e);
                Vec::new()
            }
        }
    }

    /// Base rules plus enhancement, packaged as a [`JobWithSkills`].
    pub async fn annotate(&self, job: &JobPosting, category: &str) -> Result<JobWithSkills> {
        if job.title.trim().is_empty() {
            anyhow::bail!("posting has no title");
        }

        let base = self.infer_base_skills(job, category);
        let extra = self.enhance(job, &base).await;
        let source = if extra.is_empty() {
            SkillsSource::Inferred
        } else {
            SkillsSource::AiEnhanced
        };

        let skills = union(base, extra);
        debug!("Inferred {} skills for '{}'", skills.len(), job.title);
        Ok(JobWithSkills::new(job.clone(), skills, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::skills_db::SkillList;
    use crate::test_utils::ScriptedGenerator;

    fn job(title: &str) -> JobPosting {
        JobPosting::new(title, "Acme", "Colombo, Sri Lanka", "AI Engineer")
    }

    fn as_set(skills: &[String]) -> HashSet<&str> {
        skills.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_core_skills_capped_at_five() {
        let skills = infer_base_skills(&job("Platform Engineer"), "AI ENGINEER", SKILLS_DATABASE);
        assert_eq!(
            skills,
            vec!["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch"]
        );
    }

    #[test]
    fn test_senior_pulls_advanced_skills() {
        let skills = infer_base_skills(
            &job("Senior Platform Engineer"),
            "AI ENGINEER",
            SKILLS_DATABASE,
        );
        let set = as_set(&skills);
        assert!(set.contains("MLOps"));
        assert!(set.contains("Kubernetes"));
        assert!(set.contains("Docker"));
        assert!(!set.contains("AWS"));
    }

    #[test]
    fn test_senior_without_advanced_list_adds_nothing() {
        let skills = infer_base_skills(
            &job("Senior Statistician"),
            "DATA SCIENCE ENGINEER",
            SKILLS_DATABASE,
        );
        assert_eq!(skills.len(), 5);
    }

    #[test]
    fn test_triggers_union_without_duplicates() {
        let skills = infer_base_skills(
            &job("Python Machine Learning Engineer"),
            "PYTHON DEVELOPER",
            SKILLS_DATABASE,
        );
        let set = as_set(&skills);
        assert_eq!(set.len(), skills.len());
        assert!(set.contains("Scikit-learn"));
        assert!(set.contains("Django"));
        assert!(set.contains("Machine Learning"));
        assert!(set.contains("FastAPI"));
        assert!(!set.contains("AI"));
    }

    #[test]
    fn test_unknown_category_uses_triggers_only() {
        let skills = infer_base_skills(&job("Data Scientist"), "CHEF", SKILLS_DATABASE);
        assert_eq!(as_set(&skills), HashSet::from(["Python", "R", "SQL", "Statistics"]));
    }

    #[test]
    fn test_custom_skills_db() {
        static DB: &[CategorySkills] = &[CategorySkills {
            category: "RUST DEVELOPER",
            lists: &[SkillList {
                name: CORE_SKILLS,
                skills: &["Rust", "Tokio"],
            }],
        }];
        let skills = infer_base_skills(&job("Backend Developer"), "RUST DEVELOPER", DB);
        assert_eq!(skills, vec!["Rust", "Tokio"]);
    }

    #[tokio::test]
    async fn test_enhance_parses_generator_output() {
        let generator = Arc::new(ScriptedGenerator::new());
        generator.push_text("```json\n[\"Docker\", \"Kubernetes\", 3]\n```");
        let engine = SkillInferenceEngine::new(Some(generator.clone()));

        let extra = engine.enhance(&job("AI Engineer"), &["Python".to_string()]).await;

        assert_eq!(extra, vec!["Docker", "Kubernetes"]);
        assert_eq!(engine.enhancer_name(), Some("scripted"));
        assert_eq!(SkillInferenceEngine::rules_only().enhancer_name(), None);
        assert_eq!(generator.calls(), 1);
        assert!(generator.prompts()[0].contains("Current skills: Python"));
    }

    #[tokio::test]
    async fn test_enhance_swallows_failures() {
        let generator = Arc::new(ScriptedGenerator::new());
        generator.push_failure("connection refused");
        generator.push_text("not json at all");
        generator.push_text(r#"{"skills": ["Go"]}"#);
        let engine = SkillInferenceEngine::new(Some(generator.clone()));

        for _ in 0..3 {
            assert!(engine.enhance(&job("AI Engineer"), &[]).await.is_empty());
        }
        assert_eq!(generator.calls(), 3);
    }

    #[tokio::test]
    async fn test_annotate_merges_and_tags_source() {
        let generator = Arc::new(ScriptedGenerator::new());
        generator.push_text(r#"["Python", "LangChain"]"#);
        let engine = SkillInferenceEngine::new(Some(generator));

        let annotated = engine.annotate(&job("Platform Engineer"), "AI ENGINEER").await.unwrap();

        assert_eq!(annotated.skills_source, SkillsSource::AiEnhanced);
        assert_eq!(annotated.skills_count(), 6);
        assert!(annotated.skills().contains(&"LangChain".to_string()));
    }

    #[tokio::test]
    async fn test_annotate_without_generator_is_inferred() {
        let engine = SkillInferenceEngine::rules_only();
        let annotated = engine.annotate(&job("Platform Engineer"), "AI ENGINEER").await.unwrap();
        assert_eq!(annotated.skills_source, SkillsSource::Inferred);
        assert_eq!(annotated.skills_count(), 5);
    }

    #[tokio::test]
    async fn test_annotate_rejects_blank_title() {
        let engine = SkillInferenceEngine::rules_only();
        assert!(engine.annotate(&job("   "), "AI ENGINEER").await.is_err());
    }
}
