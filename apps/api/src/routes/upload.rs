//! POST /upload: resume file in, skill list out.

use axum::{
    extract::{multipart::MultipartError, multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

/// Multipart field that carries the resume.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub skills: Vec<String>,
    pub document_id: Uuid,
}

struct UploadedFile {
    filename: String,
    bytes: Bytes,
}

/// POST /upload
///
/// Validates the upload, extracts text, asks the skill backend for skills and
/// stores a `ResumeRecord`. Nothing is persisted unless every step succeeds.
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let limit_mb = state.upload_limit_mb;
    let multipart = multipart.map_err(|e| {
        warn!("Upload rejected, not a multipart body: {e}");
        AppError::MissingFile
    })?;

    let UploadedFile { filename, bytes } = read_file_field(multipart, limit_mb).await?;

    // Checked after the full read.
    if bytes.len() > state.upload_limit_bytes() {
        warn!("Upload '{filename}' rejected: {} bytes", bytes.len());
        return Err(AppError::FileTooLarge { limit_mb });
    }

    info!("Processing upload '{filename}' ({} bytes)", bytes.len());

    // PDF parsing is CPU-bound; keep it off the async workers.
    let name = filename.clone();
    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, &name))
        .await
        .map_err(|e| AppError::Extraction(format!("extraction task failed: {e}")))??;

    let skills = state.skills.extract_skills(&text).await?;

    let record = ResumeRecord::new(filename, skills, text);
    let document_id = state.records.insert(&record).await?;

    info!(
        "Stored resume '{}' as {document_id} with {} skill(s)",
        record.filename,
        record.skills.len()
    );

    Ok(Json(UploadResponse {
        success: true,
        skills: record.skills,
        document_id,
    }))
}

/// Finds the `file` part and reads it fully into memory.
async fn read_file_field(mut multipart: Multipart, limit_mb: usize) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit_mb))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        // A part without a filename parameter is a plain form value, not a file.
        let filename = match field.file_name() {
            None => continue,
            Some("") => return Err(AppError::EmptyFilename),
            Some(name) => name.to_string(),
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit_mb))?;

        return Ok(UploadedFile { filename, bytes });
    }

    Err(AppError::MissingFile)
}

fn multipart_error(err: MultipartError, limit_mb: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::FileTooLarge { limit_mb };
    }
    warn!("Malformed multipart body: {err}");
    AppError::MissingFile
}
