//! Axum route handler for resume parsing.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::files::{UploadedFile, FALLBACK_CONTENT_TYPE};
use crate::resume::parser::parse_resume;
use crate::state::AppState;

/// Multipart field that carries the resume.
pub const RESUME_FIELD: &str = "resumeFile";

/// POST /api/parse-resume
///
/// Accepts one file in the `resumeFile` multipart field and returns the
/// model's structured record. No upstream call is made without a file;
/// a body that is not multipart at all counts as "no file".
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let file = match multipart {
        Ok(multipart) => read_resume_file(multipart).await?,
        Err(rejection) => {
            warn!("Upload is not multipart: {rejection}");
            None
        }
    }
    .ok_or_else(|| AppError::BadRequest("No file uploaded.".to_string()))?;

    info!(
        "Parsing resume '{}' ({}, {} bytes)",
        file.file_name,
        file.content_type,
        file.content.len()
    );

    let record = parse_resume(&file, state.llm.as_ref(), &state.config.model).await?;
    Ok(Json(record))
}

/// Pulls the first `resumeFile` part that is an actual file (has a filename).
/// Other parts are drained and ignored.
async fn read_resume_file(mut multipart: Multipart) -> Result<Option<UploadedFile>, AppError> {
    let mut found = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!("Malformed multipart body: {e}");
        AppError::BadRequest(format!("Malformed upload: {e}"))
    })? {
        let is_file = field.name() == Some(RESUME_FIELD) && field.file_name().is_some();
        if !is_file || found.is_some() {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed upload: {e}")))?;

        found = Some(UploadedFile {
            content,
            content_type,
            file_name,
        });
    }

    Ok(found)
}
