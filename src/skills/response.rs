// src/skills/response.rs
use crate::types::JobPosting;

const PROMPT_SKILL_LIMIT: usize = 5;

pub fn build_enhancement_prompt(job: &JobPosting, base_skills: &[String]) -> String {
    let current: Vec<&str> = base_skills
        .iter()
        .take(PROMPT_SKILL_LIMIT)
        .map(String::as_str)
        .collect();

    format!(
        r#"Based on this job, suggest 3 additional technical skills:

Title: {}
Company: {}
Location: {}
Current skills: {}

Return only JSON array: ["skill1", "skill2", "skill3"]"#,
        job.title,
        job.company,
        job.location,
        current.join(", ")
    )
}

/// Removes a surrounding markdown code fence, including its language tag.
pub fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(after_open) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let body = match after_open.find('\n') {
        Some(newline) => &after_open[newline + 1..],
        None => after_open,
    };

    match body.rfind("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Parses a JSON array of skill names. Non-string and blank elements are
/// dropped; anything that is not a JSON array yields `None`.
pub fn parse_skill_list(content: &str) -> Option<Vec<String>> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(content)).ok()?;
    let items = value.as_array()?;

    Some(
        items
            .iter()
            .filter_map(|item| item.as_str())
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_at_most_five_skills() {
        let job = JobPosting::new("ML Engineer", "Acme", "Remote", "ML Engineer");
        let skills: Vec<String> = (1..=7).map(|i| format!("Skill{}", i)).collect();
        let prompt = build_enhancement_prompt(&job, &skills);

        assert!(prompt.contains("Title: ML Engineer"));
        assert!(prompt.contains("Company: Acme"));
        assert!(prompt.contains("Location: Remote"));
        assert!(prompt.contains("Current skills: Skill1, Skill2, Skill3, Skill4, Skill5\n"));
        assert!(!prompt.contains("Skill6"));
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n[\"Go\"]\n```"), "[\"Go\"]");
        assert_eq!(strip_code_fence("```\n[\"Go\"]\n```"), "[\"Go\"]");
        assert_eq!(strip_code_fence("  [\"Go\"]  "), "[\"Go\"]");
        assert_eq!(strip_code_fence("```json\n[\"Go\"]"), "[\"Go\"]");
    }

    #[test]
    fn test_parse_plain_array() {
        assert_eq!(
            parse_skill_list(r#"["Docker", " Kubernetes ", "MLflow"]"#),
            Some(vec!["Docker".to_string(), "Kubernetes".to_string(), "MLflow".to_string()])
        );
    }

    #[test]
    fn test_parse_fenced_array() {
        let response = "```json\n[\"Spark\", \"Kafka\"]\n```";
        assert_eq!(
            parse_skill_list(response),
            Some(vec!["Spark".to_string(), "Kafka".to_string()])
        );
    }

    #[test]
    fn test_parse_drops_non_strings() {
        assert_eq!(
            parse_skill_list(r#"["Rust", 42, null, {"a": 1}, ""]"#),
            Some(vec!["Rust".to_string()])
        );
    }

    #[test]
    fn test_parse_rejects_non_lists() {
        assert_eq!(parse_skill_list(r#"{"skills": ["Rust"]}"#), None);
        assert_eq!(parse_skill_list("Sure! Here are three skills: Rust, Go, Zig"), None);
        assert_eq!(parse_skill_list(""), None);
    }
}
