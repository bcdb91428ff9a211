// src/core/mod.rs
//! Configuration, file system, database and text generation services

pub mod config_manager;
pub mod database;
pub mod fs_ops;
pub mod llm_client;

pub use config_manager::{ConfigManager, ScrapingConfig, ServiceConfig};
pub use database::{AnalysisResultRepository, Database};
pub use fs_ops::FsOps;
pub use llm_client::{OpenAiClient, TextGenerator};
