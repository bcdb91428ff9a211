// src/job_source/linkedin_scraper.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use super::JobSource;
use crate::catalog::DateFilter;
use crate::types::JobPosting;
use crate::utils::clean_text;

const SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const CARD_SELECTORS: &[&str] = &[
    ".job-search-card",
    ".base-search-card",
    "[data-view-name='job-card']",
    ".jobs-search__results-list li",
];

const TITLE_SELECTORS: &[&str] = &[
    "h3.base-search-card__title a",
    ".base-search-card__title a",
    "h3 a",
    "h3",
];

const COMPANY_SELECTORS: &[&str] = &[
    "h4.base-search-card__subtitle a",
    ".base-search-card__subtitle a",
    "h4",
];

const LOCATION_SELECTORS: &[&str] = &[
    ".job-search-card__location",
    ".base-search-card__metadata span",
    "[data-test='job-location']",
];

const LINK_SELECTORS: &[&str] = &["a.base-card__full-link", "a"];

pub struct LinkedInScraper {
    client: Client,
    max_jobs: usize,
}

impl LinkedInScraper {
    pub fn new(max_jobs: usize, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, max_jobs })
    }

    pub fn search_url(keyword: &str, location: &str, recency: DateFilter) -> Result<Url> {
        Url::parse_with_params(
            SEARCH_URL,
            &[
                ("keywords", keyword),
                ("location", location),
                ("f_TPR", recency.code()),
            ],
        )
        .context("Failed to build search URL")
    }

    /// Extracts complete postings (title, company and location present) from a
    /// search results page.
    pub fn parse_job_cards(html: &str, keyword: &str, max_jobs: usize) -> Vec<JobPosting> {
        let document = Html::parse_document(html);

        let cards: Vec<ElementRef> = CARD_SELECTORS
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
            .map(|selector| document.select(&selector).collect::<Vec<_>>())
            .find(|cards| !cards.is_empty())
            .unwrap_or_default();

        cards
            .into_iter()
            .take(max_jobs)
            .filter_map(|card| Self::parse_card(card, keyword))
            .collect()
    }

    fn parse_card(card: ElementRef, keyword: &str) -> Option<JobPosting> {
        let title = Self::find_text_by_selectors(card, TITLE_SELECTORS)?;
        let company = Self::find_text_by_selectors(card, COMPANY_SELECTORS)?;
        let location = Self::find_text_by_selectors(card, LOCATION_SELECTORS)?;

        let mut posting = JobPosting::new(&title, &company, &location, keyword);
        if let Some(url) = Self::find_link(card) {
            posting = posting.with_url(url);
        }
        Some(posting)
    }

    fn find_text_by_selectors(element: ElementRef, selectors: &[&str]) -> Option<String> {
        for selector_str in selectors {
            let Ok(selector) = Selector::parse(selector_str) else {
                continue;
            };
            if let Some(found) = element.select(&selector).next() {
                let text = found
                    .value()
                    .attr("title")
                    .map(clean_text)
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| clean_text(&found.text().collect::<Vec<_>>().join(" ")));
                if text.len() > 2 {
                    return Some(text);
                }
            }
        }
        None
    }

    fn find_link(card: ElementRef) -> Option<String> {
        LINK_SELECTORS
            .iter()
            .filter_map(|s| Selector::parse(s).ok())
            .find_map(|selector| {
                card.select(&selector)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| href.trim().to_string())
            })
            .filter(|href| !href.is_empty())
    }
}

#[async_trait]
impl JobSource for LinkedInScraper {
    async fn search(
        &self,
        keyword: &str,
        location: &str,
        recency: DateFilter,
    ) -> Result<Vec<JobPosting>> {
        let url = Self::search_url(keyword, location, recency)?;
        info!("Fetching job search: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch job search for '{}'", keyword))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        let html = response
            .text()
            .await
            .context("Failed to read response body")?;

        let jobs = Self::parse_job_cards(&html, keyword, self.max_jobs);
        if jobs.is_empty() {
            warn!("No job cards found for '{}' in {}", keyword, location);
        } else {
            info!("Extracted {} jobs for '{}'", jobs.len(), keyword);
        }

        Ok(jobs)
    }

    fn name(&self) -> &str {
        "LinkedIn"
    }
}
