use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub query: Option<String>,
    pub location: Option<String>,
}

/// GET /jobs
///
/// Provider diagnostics are logged but never forwarded to the caller.
/// Unreadable query strings fail the same way as provider errors.
pub async fn handle_jobs(
    State(state): State<AppState>,
    params: Result<Query<JobsQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        error!("Jobs error: {rejection}");
        AppError::upstream("Failed to fetch jobs")
    })?;

    let payload = state
        .jobs
        .search(params.query.as_deref(), params.location.as_deref())
        .await
        .map_err(|e| {
            error!("Jobs error: {e}");
            AppError::upstream("Failed to fetch jobs")
        })?;

    Ok(Json(payload))
}
