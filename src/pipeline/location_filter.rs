// src/pipeline/location_filter.rs
//! Heuristic location equivalence. Rules are tried in a fixed order and the
//! first one that applies decides the verdict.

use std::fmt;
use tracing::{debug, info};

use crate::catalog::{AliasGroup, CITY_ALIASES, REGION_ALIASES};
use crate::types::JobPosting;

/// Which rule accepted a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    Substring,
    Region(&'static str),
    City(&'static str),
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::Substring => write!(f, "substring"),
            MatchRule::Region(name) => write!(f, "region '{}'", name),
            MatchRule::City(name) => write!(f, "city '{}'", name),
        }
    }
}

fn region_for(requested: &str) -> Option<&'static AliasGroup> {
    REGION_ALIASES
        .iter()
        .find(|group| group.name == requested || group.variants.contains(&requested))
}

fn city_for(requested: &str) -> Option<&'static AliasGroup> {
    CITY_ALIASES.iter().find(|group| group.name == requested)
}

/// Rule that accepts `job_location` for `requested_location`, if any.
pub fn match_rule(job_location: &str, requested_location: &str) -> Option<MatchRule> {
    let job = job_location.trim().to_lowercase();
    let requested = requested_location.trim().to_lowercase();

    if job.is_empty() || requested.is_empty() {
        return None;
    }

    if job.contains(&requested) || requested.contains(&job) {
        return Some(MatchRule::Substring);
    }

    // A region group that claims the requested name settles the verdict,
    // even when the same name is also a city key.
    if let Some(group) = region_for(&requested) {
        return group
            .matches_any(&job)
            .then_some(MatchRule::Region(group.name));
    }

    if let Some(group) = city_for(&requested) {
        return group.matches_any(&job).then_some(MatchRule::City(group.name));
    }

    None
}

pub fn matches(job_location: &str, requested_location: &str) -> bool {
    match_rule(job_location, requested_location).is_some()
}

#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    pub kept: Vec<JobPosting>,
    pub rejected: usize,
}

/// Keeps postings whose location matches, preserving order.
pub fn filter(postings: &[JobPosting], requested_location: &str) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for posting in postings {
        match match_rule(&posting.location, requested_location) {
            Some(rule) => {
                debug!(
                    "KEEP: {} at {} - Location: {} ({})",
                    posting.title, posting.company, posting.location, rule
                );
                outcome.kept.push(posting.clone());
            }
            None => {
                debug!(
                    "REJECT: {} at {} - Location: {} (not {})",
                    posting.title, posting.company, posting.location, requested_location
                );
                outcome.rejected += 1;
            }
        }
    }

    info!(
        "Location filter for '{}': {} scraped, {} kept, {} rejected",
        requested_location,
        postings.len(),
        outcome.kept.len(),
        outcome.rejected
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_either_direction() {
        assert!(matches("san francisco", "san francisco, ca"));
        assert!(matches("san francisco, ca", "san francisco"));
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert!(matches("  Colombo, Sri Lanka ", "SRI LANKA"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!matches("", "sri lanka"));
        assert!(!matches("Colombo", "   "));
    }

    #[test]
    fn test_region_aliases() {
        assert!(matches("colombo, sri lanka", "sri lanka"));
        assert!(!matches("london, uk", "sri lanka"));
        assert_eq!(
            match_rule("Galle, Southern Province", "Sri Lanka"),
            Some(MatchRule::Region("sri lanka"))
        );
        assert_eq!(
            match_rule("Austin, Texas, United States", "usa"),
            Some(MatchRule::Region("usa"))
        );
        assert!(matches("Manchester, England", "uk"));
    }

    #[test]
    fn test_region_variant_as_request() {
        // "america" is a variant of the usa group, so the whole group applies.
        assert!(matches("Seattle, WA, USA", "america"));
    }

    #[test]
    fn test_region_claims_city_names() {
        // "colombo" is listed under the sri lanka region, which wins over the city table.
        assert_eq!(
            match_rule("Galle, Sri Lanka", "Colombo"),
            Some(MatchRule::Region("sri lanka"))
        );
    }

    #[test]
    fn test_city_aliases() {
        assert_eq!(
            match_rule("Remote, United States", "new york"),
            Some(MatchRule::City("new york"))
        );
        assert!(matches("Bengaluru, Karnataka", "bangalore"));
        assert!(!matches("Paris, France", "london"));
    }

    #[test]
    fn test_unknown_location_without_overlap() {
        assert!(!matches("Berlin, Germany", "munich"));
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert!(matches("Toronto, Ontario", "toronto"));
            assert!(!matches("Toronto, Ontario", "sydney"));
        }
    }

    #[test]
    fn test_filter_preserves_order_and_counts() {
        let postings = vec![
            JobPosting::new("A", "X", "Colombo, Sri Lanka", "k"),
            JobPosting::new("B", "Y", "London, UK", "k"),
            JobPosting::new("C", "Z", "Kandy", "k"),
        ];

        let outcome = filter(&postings, "Sri Lanka");

        assert_eq!(outcome.rejected, 1);
        let titles: Vec<&str> = outcome.kept.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }
}
