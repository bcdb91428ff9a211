// src/pipeline/dedupe.rs
use std::collections::HashSet;
use tracing::debug;

use crate::types::JobPosting;

/// Keeps the first posting for each title/company identity, in input order.
///
/// Postings with a blank title or company have no usable identity; they are
/// never treated as duplicates of anything and always pass through.
pub fn dedupe(postings: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut seen = HashSet::new();
    let total = postings.len();

    let unique: Vec<JobPosting> = postings
        .into_iter()
        .filter(|posting| !posting.has_identity() || seen.insert(posting.identity_key()))
        .collect();

    debug!("Deduplicated {} postings down to {}", total, unique.len());
    unique
}
