// src/storage/json_store.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

use super::ResultStore;
use crate::core::FsOps;
use crate::types::AnalysisRecord;
use crate::utils::is_valid_record_name;

/// One pretty-printed `<name>.json` file per record.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn record_path(&self, name: &str) -> Result<PathBuf> {
        if !is_valid_record_name(name) {
            anyhow::bail!("Invalid record name: {}", name);
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

#[async_trait]
impl ResultStore for JsonFileStore {
    async fn save(&self, name: &str, record: &AnalysisRecord) -> Result<()> {
        let path = self.record_path(name)?;
        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize analysis record")?;

        FsOps::write_file_safe(&path, &content).await?;
        info!("Saved analysis results to {}", path.display());
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<AnalysisRecord> {
        let path = self.record_path(name)?;
        if !path.exists() {
            anyhow::bail!("Analysis record not found: {}", name);
        }

        let content = FsOps::read_file_safe(&path).await?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse analysis record: {}", path.display()))
    }

    async fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = FsOps::list_files_with_extension(&self.dir, "json")
            .await?
            .into_iter()
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .filter(|name| is_valid_record_name(name))
            .collect();

        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }

    async fn health_check(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.dir).await?;
        if !self.dir.is_dir() {
            anyhow::bail!("Results path is not a directory: {}", self.dir.display());
        }
        Ok(())
    }
}
