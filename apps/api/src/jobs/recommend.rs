//! Per-role job recommendation. Each role gets one isolated search; a failure
//! is folded into that role's section and the loop moves on.

use serde::Serialize;
use tracing::{info, warn};

use crate::jobs::client::JobSearch;
use crate::jobs::models::JobRecord;

/// Outcome of the search for a single role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoleOutcome {
    Jobs {
        jobs: Vec<JobRecord>,
    },
    NoJobs {
        message: String,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSection {
    pub role: String,
    pub location: String,
    #[serde(flatten)]
    pub outcome: RoleOutcome,
}

/// Searches for a single (role, location) pair and converts the result into a section.
pub async fn search_role(search: &dyn JobSearch, role: &str, location: &str) -> RoleSection {
    let outcome = match search.search(role, location).await {
        Ok(jobs) if jobs.is_empty() => RoleOutcome::NoJobs {
            message: format!("No jobs found for {role} in {location}."),
        },
        Ok(jobs) => RoleOutcome::Jobs { jobs },
        Err(e) => {
            warn!("Job search failed for '{role}' in {location}: {e}");
            RoleOutcome::Error {
                status_code: e.status(),
                message: format!("Error fetching jobs for {role}: {e}"),
            }
        }
    };

    RoleSection {
        role: role.to_string(),
        location: location.to_string(),
        outcome,
    }
}

/// Runs one search per role, sequentially, preserving role order.
pub async fn recommend_jobs(
    search: &dyn JobSearch,
    roles: &[&str],
    location: &str,
) -> Vec<RoleSection> {
    let mut sections = Vec::with_capacity(roles.len());
    for role in roles {
        sections.push(search_role(search, role, location).await);
    }

    let failed = sections
        .iter()
        .filter(|s| matches!(s.outcome, RoleOutcome::Error { .. }))
        .count();
    info!(
        "Job recommendations for {} roles in {location}: {failed} failed",
        sections.len()
    );

    sections
}
