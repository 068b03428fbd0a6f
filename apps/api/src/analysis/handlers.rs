//! Axum route handlers for job description analysis.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::analysis::analyzer::AnalysisResult;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    pub job_description: Option<String>,
}

/// POST /api/analyze-job
///
/// Only a missing or blank description is an error. An unreadable body and
/// model failures both come back as fallback content.
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeJobRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable analyze request ({rejection}); using fallback analysis");
            return Ok(Json(AnalysisResult::unavailable_fallback()));
        }
    };

    let analysis = state
        .analyzer
        .analyze(request.job_description.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(analysis))
}
