//! Axum route handlers for the Analyze API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::analysis::scorer::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

const MISSING_TEXT: &str = "Both resume_text and jd_text are required";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub jd_text: Option<String>,
    pub top_n: Option<usize>,
}

/// POST /analyze
///
/// Scores the resume against the JD and returns keywords, gaps and suggestions.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let resume_text = non_blank(request.resume_text.as_deref())
        .ok_or_else(|| AppError::Validation(MISSING_TEXT.to_string()))?;
    let jd_text = non_blank(request.jd_text.as_deref())
        .ok_or_else(|| AppError::Validation(MISSING_TEXT.to_string()))?;

    if let Some(top_n) = request.top_n {
        let max = state.config.max_top_n;
        if top_n == 0 || top_n > max {
            return Err(AppError::Validation(format!(
                "top_n must be between 1 and {max}"
            )));
        }
    }

    Ok(Json(state.scorer.analyze(resume_text, jd_text, request.top_n)))
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
