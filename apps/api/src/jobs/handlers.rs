//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::recommend::{search_role, RoleSection};
use crate::skills::taxonomy::{default_location, resolve_location, LOCATIONS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub role: String,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: &'static [&'static str],
    pub default: &'static str,
}

/// Validates an optional location against the fixed set, falling back to the default.
pub fn location_or_default(location: Option<&str>) -> Result<&'static str, AppError> {
    match location.map(str::trim).filter(|l| !l.is_empty()) {
        None => Ok(default_location()),
        Some(l) => resolve_location(l).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported location '{l}'. Choose one of: {}",
                LOCATIONS.join(", ")
            ))
        }),
    }
}

/// GET /api/v1/locations
pub async fn handle_get_locations() -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: LOCATIONS,
        default: default_location(),
    })
}

/// GET /api/v1/jobs?role=&location=
///
/// Searches a single role. Upstream failures come back as an `error` section, not an HTTP error.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<RoleSection>, AppError> {
    let role = params.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }
    let location = location_or_default(params.location.as_deref())?;

    Ok(Json(
        search_role(state.job_search.as_ref(), role, location).await,
    ))
}
