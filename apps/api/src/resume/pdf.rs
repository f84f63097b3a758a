//! PDF text extraction for uploaded resumes.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts the text of every page, concatenated in page order.
///
/// Runs inside `spawn_blocking`: parsing is CPU-bound and `pdf-extract` can
/// panic on malformed input, which surfaces here as a join error and is
/// reported for this request only.
pub async fn extract_text_from_pdf(bytes: Bytes) -> Result<String, AppError> {
    check_pdf_header(&bytes)?;

    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?
    .map_err(|e| AppError::UnprocessableEntity(format!("Could not read PDF: {e}")))?;

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}

fn check_pdf_header(bytes: &[u8]) -> Result<(), AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    // Some producers emit a BOM or whitespace before the header; allow it within the first KiB.
    let window = &bytes[..bytes.len().min(1024)];
    if !window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
        return Err(AppError::UnprocessableEntity(
            "Uploaded file is not a PDF document".to_string(),
        ));
    }
    Ok(())
}
