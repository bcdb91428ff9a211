// src/web/handlers.rs
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

use crate::analysis::build_report;
use crate::catalog::{search_keywords, DateFilter, JOB_CATEGORIES};
use crate::error::PipelineError;
use crate::pipeline::AnalysisRequest;
use crate::types::{AnalysisRecord, AnalyticsReport};
use crate::utils::is_valid_record_name;
use crate::web::types::*;

pub type ApiError = (Status, Json<StandardErrorResponse>);

fn api_error(status: Status, error: String, code: &str, suggestions: &[&str]) -> ApiError {
    (
        status,
        Json(StandardErrorResponse::new(
            error,
            code.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        )),
    )
}

pub async fn health_handler(state: &State<ApiState>) -> Result<Json<TextResponse>, ApiError> {
    match state.store.health_check().await {
        Ok(()) => Ok(Json(TextResponse::success(
            "Skills miner API is running".to_string(),
        ))),
        Err(e) => {
            error!("Result store health check failed: {:#}", e);
            Err(api_error(
                Status::ServiceUnavailable,
                "Result store is unavailable".to_string(),
                "STORAGE_UNAVAILABLE",
                &["Check the data directory or database is writable"],
            ))
        }
    }
}

pub async fn categories_handler() -> Json<DataResponse<CategoriesData>> {
    let data = CategoriesData {
        categories: JOB_CATEGORIES.iter().map(CategoryInfo::from).collect(),
        date_filters: DateFilter::ALL.iter().map(DateFilter::label).collect(),
    };

    Json(DataResponse::success(
        format!("{} job categories available", data.categories.len()),
        data,
    ))
}

pub async fn analyze_handler(
    request: Json<AnalysisRequest>,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalysisRunData>>, ApiError> {
    let mut analysis = request.into_inner();

    if analysis.search_keywords.is_empty() {
        analysis.search_keywords = search_keywords(&analysis.job_category);
    }

    info!(
        "Analysis requested: {} in {} ({})",
        analysis.job_category, analysis.location, analysis.date_filter
    );

    match state.workflow.run(analysis).await {
        Ok(outcome) => {
            let report = build_report(&outcome.record);
            let message = format!(
                "Analyzed {} jobs, {} unique skills",
                outcome.record.summary.total_jobs, outcome.record.summary.total_skills
            );
            Ok(Json(DataResponse::success(
                message,
                AnalysisRunData {
                    record_name: outcome.record_name,
                    record: outcome.record,
                    error_messages: outcome.state.error_messages().to_vec(),
                    report,
                },
            )))
        }
        Err(e @ PipelineError::Configuration { .. }) => {
            warn!("Rejected analysis request: {}", e);
            Err(api_error(
                Status::BadRequest,
                e.to_string(),
                e.code(),
                &[
                    "Use one of the categories from /api/categories",
                    "Or provide search_keywords explicitly",
                ],
            ))
        }
        Err(e @ PipelineError::Persistence { .. }) => {
            error!("Analysis could not be saved: {}", e);
            Err(api_error(
                Status::InternalServerError,
                e.to_string(),
                e.code(),
                &["Check the data directory or database is writable"],
            ))
        }
    }
}

pub async fn list_results_handler(
    state: &State<ApiState>,
) -> Result<Json<DataResponse<Vec<String>>>, ApiError> {
    match state.store.list().await {
        Ok(names) => Ok(Json(DataResponse::success(
            format!("{} stored analyses", names.len()),
            names,
        ))),
        Err(e) => {
            error!("Failed to list results: {:#}", e);
            Err(api_error(
                Status::InternalServerError,
                "Failed to list stored analyses".to_string(),
                "STORAGE_ERROR",
                &["Check the configured storage backend"],
            ))
        }
    }
}

async fn load_record(state: &ApiState, name: &str) -> Result<AnalysisRecord, ApiError> {
    if !is_valid_record_name(name) {
        return Err(api_error(
            Status::BadRequest,
            format!("Invalid result name: {}", name),
            "INVALID_NAME",
            &["Result names contain only letters, digits, '_' and '-'"],
        ));
    }

    state.store.load(name).await.map_err(|e| {
        warn!("Failed to load result {}: {:#}", name, e);
        api_error(
            Status::NotFound,
            format!("Analysis result not found: {}", name),
            "RESULT_NOT_FOUND",
            &["List available results with /api/results"],
        )
    })
}

pub async fn get_result_handler(
    name: &str,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalysisRecord>>, ApiError> {
    let record = load_record(state, name).await?;
    Ok(Json(DataResponse::success(
        format!("Loaded {}", name),
        record,
    )))
}

pub async fn result_analytics_handler(
    name: &str,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalyticsReport>>, ApiError> {
    let record = load_record(state, name).await?;
    Ok(Json(DataResponse::success(
        format!("Analytics for {}", name),
        build_report(&record),
    )))
}
