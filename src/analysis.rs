// src/analysis.rs
//! Aggregates over a skill-annotated job set. Every function here is pure.
//!
//! Rankings sort by descending count; equal counts keep first-seen order.

use std::collections::{HashMap, HashSet};

use crate::catalog::{SkillCategory, OTHER_CATEGORY, SKILL_CATEGORIES};
use crate::types::{
    AnalysisRecord, AnalyticsReport, CompanyAnalysis, JobWithSkills, LocationAnalysis,
    NamedCount, SkillCategoryGroup, SkillCombination, SkillCoverage, SkillFrequencyEntry,
};
use crate::utils::{percentage, round1};

pub const TOP_N: usize = 10;
pub const DEFAULT_MIN_COMBINATION_FREQUENCY: usize = 2;

/// Counts values in first-seen order, then stable-sorts by descending count.
fn ranked_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Occurrences of each skill across skill-bearing jobs. The percentage
/// denominator is the number of jobs passed in, skill-less ones included.
pub fn skill_frequencies(jobs: &[JobWithSkills]) -> Vec<SkillFrequencyEntry> {
    let total_jobs = jobs.len();

    ranked_counts(
        jobs.iter()
            .filter(|job| job.has_skills())
            .flat_map(|job| job.skills().iter().map(String::as_str)),
    )
    .into_iter()
    .map(|(skill, frequency)| SkillFrequencyEntry {
        skill,
        frequency,
        percentage: if total_jobs == 0 {
            0.0
        } else {
            percentage(frequency, total_jobs)
        },
    })
    .collect()
}

fn keyword_matches(keyword: &str, skill: &str) -> bool {
    let keyword = keyword.to_lowercase();
    let skill = skill.to_lowercase();

    // short keywords such as R and Go match whole tokens only
    if keyword.chars().count() <= 2 {
        skill
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == keyword)
    } else {
        skill.contains(&keyword)
    }
}

fn category_for(skill: &str, table: &[SkillCategory]) -> &'static str {
    table
        .iter()
        .find(|category| category.keywords.iter().any(|k| keyword_matches(k, skill)))
        .map(|category| category.name)
        .unwrap_or(OTHER_CATEGORY)
}

/// Buckets each skill under the first matching category. Groups follow the
/// category table, with "Other" last; empty groups are omitted.
pub fn categorize(skills: &[String]) -> Vec<SkillCategoryGroup> {
    let names = SKILL_CATEGORIES
        .iter()
        .map(|category| category.name)
        .chain(std::iter::once(OTHER_CATEGORY));

    let mut groups: Vec<SkillCategoryGroup> = names
        .map(|name| SkillCategoryGroup {
            category: name.to_string(),
            skills: Vec::new(),
        })
        .collect();

    for skill in skills {
        let name = category_for(skill, SKILL_CATEGORIES);
        if let Some(group) = groups.iter_mut().find(|group| group.category == name) {
            group.skills.push(skill.clone());
        }
    }

    groups.retain(|group| !group.skills.is_empty());
    groups
}

pub fn skill_combinations(jobs: &[JobWithSkills], min_frequency: usize) -> Vec<SkillCombination> {
    let total_jobs = jobs.len();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut pairs: Vec<([String; 2], usize)> = Vec::new();

    for job in jobs.iter().filter(|job| job.skills_count() >= 2) {
        let skills = job.skills();
        for (i, first) in skills.iter().enumerate() {
            for second in &skills[i + 1..] {
                let (a, b) = if first <= second {
                    (first.clone(), second.clone())
                } else {
                    (second.clone(), first.clone())
                };
                match index.get(&(a.clone(), b.clone())) {
                    Some(&slot) => pairs[slot].1 += 1,
                    None => {
                        index.insert((a.clone(), b.clone()), pairs.len());
                        pairs.push(([a, b], 1));
                    }
                }
            }
        }
    }

    let mut combinations: Vec<SkillCombination> = pairs
        .into_iter()
        .filter(|(_, frequency)| *frequency >= min_frequency)
        .map(|(skills, frequency)| SkillCombination {
            skills,
            frequency,
            percentage: percentage(frequency, total_jobs),
        })
        .collect();

    combinations.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    combinations
}

fn named(counts: Vec<(String, usize)>) -> Vec<NamedCount> {
    counts
        .into_iter()
        .map(|(name, count)| NamedCount { name, count })
        .collect()
}

pub fn company_analysis(jobs: &[JobWithSkills]) -> CompanyAnalysis {
    let counts = ranked_counts(
        jobs.iter()
            .map(|job| job.job.company.as_str())
            .filter(|company| !company.is_empty()),
    );
    let distinct = counts.len();

    CompanyAnalysis {
        total_companies: distinct,
        top_companies: named(counts.into_iter().take(TOP_N).collect()),
        unique_companies: distinct,
    }
}

pub fn location_analysis(jobs: &[JobWithSkills]) -> LocationAnalysis {
    let counts = ranked_counts(
        jobs.iter()
            .map(|job| job.job.location.as_str())
            .filter(|location| !location.is_empty()),
    );

    LocationAnalysis {
        total_locations: counts.len(),
        top_locations: named(counts.iter().take(TOP_N).cloned().collect()),
        geographic_distribution: named(counts),
    }
}

/// Dashboard metrics. Unlike [`skill_frequencies`], averages divide by the
/// number of skill-bearing jobs.
pub fn skill_coverage(jobs: &[JobWithSkills]) -> SkillCoverage {
    let skilled: Vec<&JobWithSkills> = jobs.iter().filter(|job| job.has_skills()).collect();
    let total_skills: usize = skilled.iter().map(|job| job.skills_count()).sum();
    let companies: HashSet<&str> = jobs
        .iter()
        .map(|job| job.job.company.as_str())
        .filter(|company| !company.is_empty())
        .collect();

    SkillCoverage {
        jobs_with_skills: skilled.len(),
        average_skills_per_job: round1(total_skills as f64 / skilled.len().max(1) as f64),
        analyzed_share: percentage(skilled.len(), jobs.len()),
        unique_companies: companies.len(),
    }
}

pub fn build_report(record: &AnalysisRecord) -> AnalyticsReport {
    let jobs = &record.jobs_with_skills;
    AnalyticsReport {
        skill_frequencies: skill_frequencies(jobs),
        skill_categories: categorize(&record.extracted_skills),
        skill_combinations: skill_combinations(jobs, DEFAULT_MIN_COMBINATION_FREQUENCY),
        companies: company_analysis(jobs),
        locations: location_analysis(jobs),
        coverage: skill_coverage(jobs),
    }
}
