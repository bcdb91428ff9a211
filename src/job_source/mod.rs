// src/job_source/mod.rs
pub mod linkedin_scraper;

pub use linkedin_scraper::LinkedInScraper;

use anyhow::Result;
use async_trait::async_trait;

use crate::catalog::DateFilter;
use crate::types::JobPosting;

/// Source of raw postings for one keyword. An `Err` means the whole query
/// failed; partial or empty result pages are `Ok`.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(
        &self,
        keyword: &str,
        location: &str,
        recency: DateFilter,
    ) -> Result<Vec<JobPosting>>;

    fn name(&self) -> &str;
}
