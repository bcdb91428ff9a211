// src/web/types.rs
use rocket::serde::Serialize;
use std::sync::Arc;

use crate::catalog::JobCategory;
use crate::pipeline::SkillsWorkflow;
use crate::storage::ResultStore;
use crate::types::{AnalysisRecord, AnalyticsReport};

/// Shared server state handed to every route.
pub struct ApiState {
    pub workflow: Arc<SkillsWorkflow>,
    pub store: Arc<dyn ResultStore>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CategoryInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: Vec<&'static str>,
}

impl From<&JobCategory> for CategoryInfo {
    fn from(category: &JobCategory) -> Self {
        Self {
            name: category.name,
            description: category.description,
            keywords: category.keywords.to_vec(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CategoriesData {
    pub categories: Vec<CategoryInfo>,
    pub date_filters: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalysisRunData {
    pub record_name: String,
    pub record: AnalysisRecord,
    pub error_messages: Vec<String>,
    pub report: AnalyticsReport,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}
