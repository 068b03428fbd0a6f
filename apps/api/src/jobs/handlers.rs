//! Axum route handlers for the job application store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::jobs::stats::{compute_stats, JobStats};
use crate::jobs::validation::{validate_job_input, JobInput};
use crate::models::job::JobApplication;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let Json(input) = payload?;
    let fields = validate_job_input(input)?;
    let job = state.store.create(fields).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
///
/// The body carries all four mutable fields; partial updates are rejected.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JobInput>, JsonRejection>,
) -> Result<Json<JobApplication>, AppError> {
    let Json(input) = payload?;
    let fields = validate_job_input(input)?;
    let job = state.store.update(&id, fields).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.store.delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Job deleted successfully".to_string(),
    }))
}

/// GET /api/jobs/stats
pub async fn handle_job_stats(State(state): State<AppState>) -> Result<Json<JobStats>, AppError> {
    let jobs = state.store.list().await?;
    Ok(Json(compute_stats(&jobs)))
}
