//! Axum route handlers for the skills and roles API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::extractor::{extract_skills, ExtractedSkills};
use crate::skills::roles::{infer_roles, RoleRule, ROLE_RULES};
use crate::skills::taxonomy::{SkillCategory, SKILL_TAXONOMY};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: ExtractedSkills,
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct InferRolesRequest {
    pub skills: ExtractedSkills,
}

#[derive(Debug, Serialize)]
pub struct InferRolesResponse {
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub categories: &'static [SkillCategory],
    pub role_rules: &'static [RoleRule],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills/taxonomy
pub async fn handle_get_taxonomy() -> Json<TaxonomyResponse> {
    Json(TaxonomyResponse {
        categories: SKILL_TAXONOMY,
        role_rules: ROLE_RULES,
    })
}

/// POST /api/v1/skills/extract
///
/// Runs extraction and role inference over plain text. Useful for previewing
/// what an uploaded resume would produce without calling the job service.
pub async fn handle_extract(
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let skills = extract_skills(&request.text);
    let roles = infer_roles(&skills);

    Ok(Json(ExtractResponse { skills, roles }))
}

/// POST /api/v1/roles/infer
pub async fn handle_infer_roles(
    Json(request): Json<InferRolesRequest>,
) -> Json<InferRolesResponse> {
    Json(InferRolesResponse {
        roles: infer_roles(&request.skills),
    })
}
