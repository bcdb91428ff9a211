// src/core/config_manager.rs
//! Process configuration: paths from config.yaml, services and scraping from the environment

use anyhow::Result;
use serde::Deserialize;
use std::str::FromStr;
use tracing::{info, warn};

use crate::environment::EnvironmentConfig;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: EnvironmentConfig,
    pub service: ServiceConfig,
    pub scraping: ScrapingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingConfig {
    pub max_jobs_per_search: usize,
    pub search_delay_min_ms: u64,
    pub search_delay_max_ms: u64,
    pub timeout_seconds: u64,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            max_jobs_per_search: 10,
            search_delay_min_ms: 3000,
            search_delay_max_ms: 5000,
            timeout_seconds: 30,
        }
    }
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let environment = EnvironmentConfig::load()?;
        let service = Self::load_service();
        let scraping = Self::load_scraping();

        Ok(Self {
            environment,
            service,
            scraping,
        })
    }

    fn load_service() -> ServiceConfig {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        ServiceConfig {
            openai_api_key,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            timeout_seconds: env_or("LLM_TIMEOUT_SECONDS", 60),
        }
    }

    fn load_scraping() -> ScrapingConfig {
        let defaults = ScrapingConfig::default();
        ScrapingConfig {
            max_jobs_per_search: env_or("MAX_JOBS_PER_SEARCH", defaults.max_jobs_per_search),
            search_delay_min_ms: env_or("SEARCH_DELAY_MIN_MS", defaults.search_delay_min_ms),
            search_delay_max_ms: env_or("SEARCH_DELAY_MAX_MS", defaults.search_delay_max_ms),
            timeout_seconds: defaults.timeout_seconds,
        }
    }

    /// Reports the loaded configuration. Call once the subscriber is installed.
    pub fn log_summary(&self) {
        info!("Environment: {}", EnvironmentConfig::environment_name());
        if !EnvironmentConfig::config_file_present() {
            warn!("config.yaml not found, using default paths");
        }
        info!("Data: {}", self.environment.data_path.display());
        info!("Log file: {}", self.environment.log_path.display());
        info!("Storage backend: {:?}", self.environment.storage_backend);

        if self.service.openai_api_key.is_none() {
            warn!("OPENAI_API_KEY not set, AI skill enhancement disabled");
        } else {
            info!("AI skill enhancement model: {}", self.service.openai_model);
        }

        info!(
            "Scraping: max {} jobs per search, {}-{}ms between searches",
            self.scraping.max_jobs_per_search,
            self.scraping.search_delay_min_ms,
            self.scraping.search_delay_max_ms
        );
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        use crate::core::FsOps;

        FsOps::ensure_dir_exists(&self.environment.data_path).await?;

        if let Some(db_parent) = self.environment.database_path.parent() {
            FsOps::ensure_dir_exists(db_parent).await?;
        }
        if let Some(log_parent) = self.environment.log_path.parent() {
            FsOps::ensure_dir_exists(log_parent).await?;
        }

        Ok(())
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value for {}: {}", name, value);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_env_or_parses_and_falls_back() {
        std::env::set_var("SKILLSMINER_TEST_LIMIT", "25");
        assert_eq!(env_or("SKILLSMINER_TEST_LIMIT", 10usize), 25);

        std::env::set_var("SKILLSMINER_TEST_LIMIT", "many");
        assert_eq!(env_or("SKILLSMINER_TEST_LIMIT", 10usize), 10);

        std::env::remove_var("SKILLSMINER_TEST_LIMIT");
        assert_eq!(env_or("SKILLSMINER_TEST_LIMIT", 10usize), 10);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_summary_reports_missing_api_key() {
        let config = ConfigManager {
            environment: EnvironmentConfig::default(),
            service: ServiceConfig {
                openai_api_key: None,
                openai_model: "gpt-3.5-turbo".to_string(),
                openai_base_url: "https://api.openai.com/v1".to_string(),
                timeout_seconds: 60,
            },
            scraping: ScrapingConfig::default(),
        };

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || config.log_summary());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("OPENAI_API_KEY not set"));
        assert!(output.contains("Scraping: max 10 jobs per search, 3000-5000ms"));
    }

    #[test]
    fn test_scraping_defaults() {
        let config = ScrapingConfig::default();
        assert_eq!(config.max_jobs_per_search, 10);
        assert_eq!(config.search_delay_min_ms, 3000);
        assert_eq!(config.search_delay_max_ms, 5000);
    }
}
