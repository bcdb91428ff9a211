// src/test_utils.rs
//! Deterministic stand-ins for the network and storage boundaries.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;

use crate::catalog::DateFilter;
use crate::core::TextGenerator;
use crate::job_source::JobSource;
use crate::storage::ResultStore;
use crate::types::{AnalysisRecord, JobPosting};

enum SearchScript {
    Jobs(Vec<JobPosting>),
    Failure(String),
}

/// Keyword-keyed canned results. Unknown keywords yield no postings.
pub struct StaticJobSource {
    scripts: HashMap<String, SearchScript>,
    calls: Mutex<Vec<String>>,
}

impl StaticJobSource {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_jobs(mut self, keyword: &str, jobs: Vec<JobPosting>) -> Self {
        self.scripts
            .insert(keyword.to_string(), SearchScript::Jobs(jobs));
        self
    }

    pub fn with_failure(mut self, keyword: &str, message: &str) -> Self {
        self.scripts
            .insert(keyword.to_string(), SearchScript::Failure(message.to_string()));
        self
    }

    /// Keywords searched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn search(
        &self,
        keyword: &str,
        _location: &str,
        _recency: DateFilter,
    ) -> Result<Vec<JobPosting>> {
        self.calls.lock().unwrap().push(keyword.to_string());
        match self.scripts.get(keyword) {
            Some(SearchScript::Jobs(jobs)) => Ok(jobs.clone()),
            Some(SearchScript::Failure(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(Vec::new()),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Replies from a queue; an exhausted queue is a failure.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push_text(&self, text: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Err(anyhow::anyhow!("no scripted response left")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub struct MemoryStore {
    records: Mutex<BTreeMap<String, AnalysisRecord>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            failing: false,
        }
    }

    /// A store whose every save is rejected.
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            failing: true,
        }
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.records.lock().unwrap().keys().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<AnalysisRecord> {
        self.records.lock().unwrap().get(name).cloned()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn save(&self, name: &str, record: &AnalysisRecord) -> Result<()> {
        if self.failing {
            anyhow::bail!("disk full");
        }
        self.records
            .lock()
            .unwrap()
            .insert(name.to_string(), record.clone());
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<AnalysisRecord> {
        self.get(name)
            .ok_or_else(|| anyhow::anyhow!("Analysis record not found: {}", name))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names = self.saved_names();
        names.reverse();
        Ok(names)
    }

    async fn health_check(&self) -> Result<()> {
        if self.failing {
            anyhow::bail!("disk full");
        }
        Ok(())
    }
}
