// src/storage/sqlite_store.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tracing::info;

use super::ResultStore;
use crate::core::{AnalysisResultRepository, Database};
use crate::types::AnalysisRecord;

/// Records kept as JSON payloads in the `analysis_results` table.
pub struct SqliteResultStore {
    db: Database,
}

impl SqliteResultStore {
    pub async fn open(database_path: &Path) -> Result<Self> {
        let db = Database::new(database_path).await?;
        Ok(Self { db })
    }

    fn repository(&self) -> AnalysisResultRepository<'_> {
        AnalysisResultRepository::new(self.db.pool())
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn save(&self, name: &str, record: &AnalysisRecord) -> Result<()> {
        let payload =
            serde_json::to_string(record).context("Failed to serialize analysis record")?;

        self.repository()
            .upsert(
                name,
                &record.job_category,
                &record.location,
                record.summary.total_jobs,
                &payload,
            )
            .await?;

        info!("Saved analysis results to database: {}", name);
        Ok(())
    }

    async fn load(&self, name: &str) -> Result<AnalysisRecord> {
        let row = self
            .repository()
            .find_by_name(name)
            .await?
            .with_context(|| format!("Analysis record not found: {}", name))?;

        serde_json::from_str(&row.payload)
            .with_context(|| format!("Failed to parse stored analysis record: {}", name))
    }

    async fn list(&self) -> Result<Vec<String>> {
        self.repository().list_names().await
    }

    async fn health_check(&self) -> Result<()> {
        self.db.health_check().await
    }
}
