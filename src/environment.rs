// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::storage::StorageBackend;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub data_path: PathBuf,
    pub database_path: PathBuf,
    pub log_path: PathBuf,
    #[serde(default)]
    pub storage_backend: StorageBackend,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            database_path: PathBuf::from("data/skills_miner.db"),
            log_path: PathBuf::from("/tmp/skillsminer.log"),
            storage_backend: StorageBackend::Json,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration based on environment. Runs before logging is set
    /// up, so it stays silent; see `ConfigManager::log_summary`.
    pub fn load() -> Result<Self> {
        let environment = Self::environment_name();

        let env_config = if Self::config_file_present() {
            Self::load_from_file(Path::new(CONFIG_FILE), &environment)?
        } else {
            Self::default()
        };

        env_config.resolved()
    }

    pub fn config_file_present() -> bool {
        Path::new(CONFIG_FILE).exists()
    }

    pub fn environment_name() -> String {
        std::env::var("SKILLSMINER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_yaml(&config_content, environment)
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// Make paths absolute
    fn resolved(self) -> Result<Self> {
        Ok(Self {
            data_path: Self::resolve_path(&self.data_path)?,
            database_path: Self::resolve_path(&self.database_path)?,
            log_path: Self::resolve_path(&self.log_path)?,
            storage_backend: self.storage_backend,
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  data_path: "data"
  database_path: "data/skills_miner.db"
  log_path: "/tmp/skillsminer.log"
production:
  data_path: "/app/data"
  database_path: "/app/data/skills_miner.db"
  log_path: "/var/log/skillsminer.log"
  storage_backend: sqlite
"#;

    #[test]
    fn test_selects_section_by_environment() {
        let local = EnvironmentConfig::from_yaml(SAMPLE, "local").unwrap();
        assert_eq!(local.data_path, PathBuf::from("data"));
        assert_eq!(local.storage_backend, StorageBackend::Json);

        let production = EnvironmentConfig::from_yaml(SAMPLE, "production").unwrap();
        assert_eq!(production.data_path, PathBuf::from("/app/data"));
        assert_eq!(production.storage_backend, StorageBackend::Sqlite);
    }

    #[test]
    fn test_unknown_environment_falls_back_to_local() {
        let config = EnvironmentConfig::from_yaml(SAMPLE, "staging").unwrap();
        assert_eq!(config.log_path, PathBuf::from("/tmp/skillsminer.log"));
    }

    #[test]
    fn test_relative_paths_are_resolved() {
        let config = EnvironmentConfig::default().resolved().unwrap();
        assert!(config.data_path.is_absolute());
        assert!(config.database_path.ends_with("data/skills_miner.db"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/skillsminer.log"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(EnvironmentConfig::from_yaml("local: [", "local").is_err());
    }
}
