use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use common::JobRecord;
use fetcher::{JobSource, extract_identifier};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn JobSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self { source }
    }
}

/// Query parameters for the fetch endpoint
#[derive(Debug, Deserialize)]
pub struct FetchParams {
    url: Option<String>,
}

pub fn build_app(state: AppState) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/api/fetch-data", get(fetch_data_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /api/fetch-data?url=<posting url>
async fn fetch_data_handler(
    State(state): State<AppState>,
    Query(params): Query<FetchParams>,
) -> Result<Json<JobRecord>, ApiError> {
    let url = params
        .url
        .filter(|url| !url.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    let job_id = extract_identifier(&url)?;
    tracing::info!(job_id = %job_id, "Extracted job id");

    let job = state
        .source
        .fetch_job_data(&job_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(job))
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "🔍 Job Posting API\n\nEndpoints:\n  GET /api/fetch-data?url=<posting url> - Fetch a job posting\n\nExample:\n  curl 'http://127.0.0.1:5000/api/fetch-data?url=https://jobs.ashbyhq.com/cohere/<job id>'"
}
