// src/core/database.rs
//! SQLite connection management and the analysis results table

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::core::FsOps;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create new database connection with automatic setup
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            FsOps::ensure_dir_exists(parent).await?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!("Database connection established: {}", database_path.display());

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS analysis_results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                job_category TEXT NOT NULL,
                location TEXT NOT NULL,
                total_jobs INTEGER NOT NULL,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create analysis_results table")?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_analysis_results_category ON analysis_results(job_category);",
        )
        .execute(&self.pool)
        .await?;

        info!("Database migrations completed");
        Ok(())
    }

    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredAnalysis {
    pub id: i64,
    pub name: String,
    pub job_category: String,
    pub location: String,
    pub total_jobs: i64,
    pub payload: String,
    pub created_at: String,
}

pub struct AnalysisResultRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AnalysisResultRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts or replaces the row stored under `name`.
    pub async fn upsert(
        &self,
        name: &str,
        job_category: &str,
        location: &str,
        total_jobs: usize,
        payload: &str,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO analysis_results (name, job_category, location, total_jobs, payload)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                job_category = excluded.job_category,
                location = excluded.location,
                total_jobs = excluded.total_jobs,
                payload = excluded.payload,
                created_at = datetime('now')
            "#,
        )
        .bind(name)
        .bind(job_category)
        .bind(location)
        .bind(total_jobs as i64)
        .bind(payload)
        .execute(self.pool)
        .await
        .with_context(|| format!("Failed to store analysis result: {}", name))?;

        Ok(())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<StoredAnalysis>> {
        let row = sqlx::query_as::<_, StoredAnalysis>(
            r#"
            SELECT id, name, job_category, location, total_jobs, payload, created_at
            FROM analysis_results
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .with_context(|| format!("Failed to query analysis result: {}", name))?;

        Ok(row)
    }

    /// Names ordered newest first.
    pub async fn list_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT name FROM analysis_results ORDER BY name DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list analysis results")?;

        Ok(names)
    }
}
