// src/storage/mod.rs
//! Persistence of analysis records under timestamp-derived names.

pub mod csv_export;
pub mod json_store;
pub mod sqlite_store;

pub use csv_export::export_jobs_csv;
pub use json_store::JsonFileStore;
pub use sqlite_store::SqliteResultStore;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::environment::EnvironmentConfig;
use crate::types::AnalysisRecord;

#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save(&self, name: &str, record: &AnalysisRecord) -> Result<()>;

    async fn load(&self, name: &str) -> Result<AnalysisRecord>;

    /// Stored record names, newest first.
    async fn list(&self) -> Result<Vec<String>>;

    /// Fails when the backing directory or database is unusable.
    async fn health_check(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
}

pub async fn open_store(environment: &EnvironmentConfig) -> Result<Arc<dyn ResultStore>> {
    match environment.storage_backend {
        StorageBackend::Json => Ok(Arc::new(JsonFileStore::new(environment.data_path.clone()))),
        StorageBackend::Sqlite => Ok(Arc::new(
            SqliteResultStore::open(&environment.database_path).await?,
        )),
    }
}
