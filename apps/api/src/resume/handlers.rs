//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::handlers::location_or_default;
use crate::resume::pdf::extract_text_from_pdf;
use crate::resume::report::{analyze_resume_text, AnalysisReport};
use crate::state::AppState;

const ACCEPTED_CONTENT_TYPES: &[&str] = &["application/pdf", "application/octet-stream"];

/// Parts read from the analyze form.
#[derive(Debug, Default)]
struct AnalyzeForm {
    file: Option<Bytes>,
    location: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") | Some("resume") => {
                if let Some(content_type) = field.content_type() {
                    let mime = content_type.split(';').next().unwrap_or_default().trim();
                    if !ACCEPTED_CONTENT_TYPES
                        .iter()
                        .any(|accepted| accepted.eq_ignore_ascii_case(mime))
                    {
                        return Err(AppError::Validation(format!(
                            "Unsupported file type '{content_type}'; upload a PDF"
                        )));
                    }
                }
                form.file = Some(field.bytes().await?);
            }
            Some("location") => form.location = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

/// POST /api/v1/resumes/analyze
///
/// Multipart form: `file` (PDF) and optional `location`.
/// Full pipeline: PDF text → skills → roles → one job search per role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let form = read_form(multipart).await?;
    let location = location_or_default(form.location.as_deref())?;
    let file = form.file.ok_or_else(|| {
        AppError::Validation("Missing 'file' part with the resume PDF".to_string())
    })?;

    info!("Analyzing uploaded resume ({} bytes) for {location}", file.len());

    let text = extract_text_from_pdf(file).await?;
    let report = analyze_resume_text(&text, location, state.job_search.as_ref()).await;

    Ok(Json(report))
}
