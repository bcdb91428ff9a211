// src/pipeline/orchestrator.rs
use anyhow::Result;
use chrono::Local;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, info_span, Instrument};

use super::dedupe::dedupe;
use super::location_filter;
use super::state::{AnalysisRequest, RunState};
use crate::core::{ConfigManager, OpenAiClient, ScrapingConfig, TextGenerator};
use crate::error::PipelineError;
use crate::job_source::{JobSource, LinkedInScraper};
use crate::skills::SkillInferenceEngine;
use crate::storage::ResultStore;
use crate::types::{AnalysisRecord, JobWithSkills};
use crate::utils::{analysis_record_name, run_timestamp};

/// Hard cap on keyword queries per run.
pub const MAX_SEARCH_KEYWORDS: usize = 3;

#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub delay_min: Duration,
    pub delay_max: Duration,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            delay_min: Duration::from_secs(3),
            delay_max: Duration::from_secs(5),
        }
    }
}

impl From<&ScrapingConfig> for WorkflowSettings {
    fn from(config: &ScrapingConfig) -> Self {
        Self {
            delay_min: Duration::from_millis(config.search_delay_min_ms),
            delay_max: Duration::from_millis(config.search_delay_max_ms),
        }
    }
}

impl WorkflowSettings {
    /// Random pause in `[delay_min, delay_max]`.
    pub fn next_delay(&self) -> Duration {
        let min = self.delay_min.as_millis() as u64;
        let max = self.delay_max.as_millis() as u64;
        if max <= min {
            return self.delay_min;
        }
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub record_name: String,
    pub record: AnalysisRecord,
    pub state: RunState,
}

pub struct SkillsWorkflow {
    source: Arc<dyn JobSource>,
    engine: SkillInferenceEngine,
    store: Arc<dyn ResultStore>,
    settings: WorkflowSettings,
}

impl SkillsWorkflow {
    pub fn new(
        source: Arc<dyn JobSource>,
        engine: SkillInferenceEngine,
        store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            source,
            engine,
            store,
            settings: WorkflowSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: WorkflowSettings) -> Self {
        self.settings = settings;
        self
    }

    /// LinkedIn source plus, when `use_ai` is set and a key is configured,
    /// the OpenAI-compatible enhancer.
    pub fn from_config(
        config: &ConfigManager,
        store: Arc<dyn ResultStore>,
        use_ai: bool,
    ) -> Result<Self> {
        let source = LinkedInScraper::new(
            config.scraping.max_jobs_per_search,
            config.scraping.timeout_seconds,
        )?;

        let generator: Option<Arc<dyn TextGenerator>> = if use_ai {
            OpenAiClient::from_config(&config.service)?
                .map(|client| Arc::new(client) as Arc<dyn TextGenerator>)
        } else {
            None
        };

        Ok(Self::new(Arc::new(source), SkillInferenceEngine::new(generator), store)
            .with_settings(WorkflowSettings::from(&config.scraping)))
    }

    pub async fn run(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, PipelineError> {
        let state = RunState::new(request);
        let span = info_span!(
            "analysis_run",
            run_id = %state.run_id,
            category = %state.job_category
        );
        self.execute(state).instrument(span).await
    }

    async fn execute(&self, mut state: RunState) -> Result<AnalysisOutcome, PipelineError> {
        if state.search_keywords.is_empty() {
            error!("No search keywords for category {}", state.job_category);
            return Err(PipelineError::Configuration {
                category: state.job_category.clone(),
            });
        }

        info!(
            "Starting analysis: {} in {} ({}), AI enhancement: {}",
            state.job_category,
            state.location,
            state.date_filter,
            self.engine.enhancer_name().unwrap_or("off")
        );

        info!("Stage: {}", state.stage);
        self.search(&mut state).await;
        state.advance();

        info!("Stage: {}", state.stage);
        Self::filter_location(&mut state);
        state.advance();

        info!("Stage: {}", state.stage);
        self.infer(&mut state).await;
        state.advance();

        info!("Stage: {}", state.stage);
        let (record_name, record) = self.save(&mut state).await?;
        state.advance();

        info!(
            "Stage: {} ({} jobs, {} skills, {} errors)",
            state.stage,
            record.summary.total_jobs,
            record.summary.total_skills,
            state.error_messages().len()
        );

        Ok(AnalysisOutcome {
            record_name,
            record,
            state,
        })
    }

    async fn search(&self, state: &mut RunState) {
        let keywords: Vec<String> = state
            .search_keywords
            .iter()
            .take(MAX_SEARCH_KEYWORDS)
            .cloned()
            .collect();

        let mut collected = Vec::new();
        for (i, keyword) in keywords.iter().enumerate() {
            if i > 0 {
                let delay = self.settings.next_delay();
                debug!("Pausing {:?} before next search", delay);
                tokio::time::sleep(delay).await;
            }

            state.set_step(format!(
                "Searching '{}' ({}/{})",
                keyword,
                i + 1,
                keywords.len()
            ));

            match self
                .source
                .search(keyword, &state.location, state.date_filter)
                .await
            {
                Ok(jobs) => {
                    info!("Found {} jobs for '{}'", jobs.len(), keyword);
                    collected.extend(jobs);
                }
                Err(e) => state.record_error(format!("Search error for '{}': {:#}", keyword, e)),
            }
        }

        let total = collected.len();
        state.raw_jobs = dedupe(collected);
        info!(
            "Collected {} unique jobs from {} results via {}",
            state.raw_jobs.len(),
            total,
            self.source.name()
        );
    }

    fn filter_location(state: &mut RunState) {
        let outcome = location_filter::filter(&state.raw_jobs, &state.location);
        let kept = outcome.kept.len();
        state.filtered_jobs = outcome.kept;
        state.set_step(format!(
            "Location filter: {} kept, {} rejected",
            kept, outcome.rejected
        ));
    }

    async fn infer(&self, state: &mut RunState) {
        let jobs = state.filtered_jobs.clone();
        let total = jobs.len();

        for (i, job) in jobs.into_iter().enumerate() {
            state.set_step(format!("Inferring skills {}/{}: {}", i + 1, total, job.title));

            match self.engine.annotate(&job, &state.job_category).await {
                Ok(entry) => {
                    state
                        .extracted_skills
                        .extend(entry.skills().iter().cloned());
                    state.jobs_with_skills.push(entry);
                }
                Err(e) => {
                    state.record_error(format!(
                        "Skill inference error for {}: {:#}",
                        job.company, e
                    ));
                    state.jobs_with_skills.push(JobWithSkills::failed(job));
                }
            }
        }

        info!(
            "Inferred {} unique skills across {} jobs",
            state.extracted_skills.len(),
            state.jobs_with_skills.len()
        );
    }

    async fn save(&self, state: &mut RunState) -> Result<(String, AnalysisRecord), PipelineError> {
        let timestamp = run_timestamp(&Local::now());
        let name = analysis_record_name(&timestamp);
        let record = state.to_record(&timestamp);

        state.set_step(format!("Saving {}", name));
        self.store
            .save(&name, &record)
            .await
            .map_err(|e| PipelineError::Persistence {
                name: name.clone(),
                message: format!("{:#}", e),
            })?;

        Ok((name, record))
    }
}
