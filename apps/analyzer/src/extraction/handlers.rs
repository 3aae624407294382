//! Axum route handler for resume uploads.

use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extraction::{extract_text, FileKind};

const FILE_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct ExtractedText {
    pub text: String,
}

/// POST /upload
///
/// Accepts a multipart form with a `resume` file (PDF or TXT) and returns its text.
pub async fn handle_upload(
    payload: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractedText>, AppError> {
    let mut multipart = payload.map_err(|rejection| {
        AppError::Validation(format!("Invalid upload: {}", rejection.body_text()))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = FileKind::from_filename(&filename).ok_or_else(|| {
            AppError::Validation("Unsupported file type. Please upload PDF or TXT.".to_string())
        })?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e.body_text())))?;
        tracing::info!(filename = %filename, size = bytes.len(), ?kind, "Extracting uploaded resume");

        let text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
            .await
            .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"))
            .and_then(|result| result)
            .map_err(|e| {
                tracing::warn!("Upload extraction error: {e:?}");
                AppError::UnprocessableEntity("Error extracting text from file".to_string())
            })?;

        return Ok(Json(ExtractedText { text }));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
