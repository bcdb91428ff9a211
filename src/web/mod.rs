// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::ApiError;
pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::info;

use crate::core::ConfigManager;
use crate::pipeline::{AnalysisRequest, SkillsWorkflow};
use crate::storage::open_store;
use crate::types::{AnalysisRecord, AnalyticsReport};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/health")]
pub async fn health(state: &State<ApiState>) -> Result<Json<TextResponse>, ApiError> {
    handlers::health_handler(state).await
}

#[get("/categories")]
pub async fn categories() -> Json<DataResponse<CategoriesData>> {
    handlers::categories_handler().await
}

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<AnalysisRequest>,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalysisRunData>>, ApiError> {
    handlers::analyze_handler(request, state).await
}

#[get("/results")]
pub async fn list_results(
    state: &State<ApiState>,
) -> Result<Json<DataResponse<Vec<String>>>, ApiError> {
    handlers::list_results_handler(state).await
}

#[get("/results/<name>")]
pub async fn get_result(
    name: &str,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalysisRecord>>, ApiError> {
    handlers::get_result_handler(name, state).await
}

#[get("/results/<name>/analytics")]
pub async fn result_analytics(
    name: &str,
    state: &State<ApiState>,
) -> Result<Json<DataResponse<AnalyticsReport>>, ApiError> {
    handlers::result_analytics_handler(name, state).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify job_category and location are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["See /api/health for the available API".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE_ENTITY".to_string(),
        vec![
            "job_category and location are required strings".to_string(),
            "date_filter must be a label such as \"Last Week\"".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

pub fn build_rocket(state: ApiState) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(state)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                categories,
                analyze,
                list_results,
                get_result,
                result_analytics,
                options,
            ],
        )
}

pub async fn start_web_server(config: ConfigManager, port: u16, use_ai: bool) -> Result<()> {
    config.ensure_directories().await?;

    let store = open_store(&config.environment).await?;
    let workflow = SkillsWorkflow::from_config(&config, store.clone(), use_ai)?;

    info!("Starting skills miner API server on port {}", port);
    info!("Results stored via {:?}", config.environment.storage_backend);

    let _rocket = build_rocket(ApiState {
        workflow: Arc::new(workflow),
        store,
    })
    .configure(rocket::Config::figment().merge(("port", port)))
    .launch()
    .await
    .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
