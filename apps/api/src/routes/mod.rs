pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::skills::handlers as skills;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Rules engine
        .route("/api/v1/skills/taxonomy", get(skills::handle_get_taxonomy))
        .route("/api/v1/skills/extract", post(skills::handle_extract))
        .route("/api/v1/roles/infer", post(skills::handle_infer_roles))
        // Job search
        .route("/api/v1/locations", get(jobs::handle_get_locations))
        .route("/api/v1/jobs", get(jobs::handle_search_jobs))
        // Resume upload
        .route("/api/v1/resumes/analyze", post(resume::handle_analyze))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
