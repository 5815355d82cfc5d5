//! HTTP handlers for the Yearscan API

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use scan_engine::ScanEngine;
use sha2::{Digest, Sha256};
use shared_types::ScanStats;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{HealthResponse, UploadResponse};
use crate::state::AppState;

/// Upload extensions accepted by the pipeline
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "hwp", "hwpx"];

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "yearscan".to_string(),
    })
}

/// Accept a multipart document upload, run the extract → scan → report
/// pipeline synchronously, and return the task id with match counts.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let (raw_filename, data) = upload.ok_or(ApiError::MissingFile)?;
    if raw_filename.is_empty() {
        return Err(ApiError::EmptyFilename);
    }
    // Validated before anything touches disk
    if !has_allowed_extension(&raw_filename) {
        return Err(ApiError::UnsupportedExtension);
    }

    let filename = sanitize_filename(&raw_filename);
    let task_id = generate_task_id();
    let content_hash = hex::encode(Sha256::digest(&data));

    tracing::info!(
        "Upload accepted: task {}, file {}, {} bytes, sha256 {}",
        task_id,
        filename,
        data.len(),
        content_hash
    );

    let input_path = state.input_path(&task_id, &filename);
    tokio::fs::write(&input_path, &data)
        .await
        .map_err(|e| ApiError::Internal(e.into()))?;

    let result = process_upload(&state, &task_id, &filename, &data);

    // Original upload is deleted best-effort in all cases
    let _ = tokio::fs::remove_file(&input_path).await;

    let stats = result?;
    Ok(Json(UploadResponse {
        success: true,
        task_id,
        message: format!("{}개의 24년 관련 내용을 찾았습니다", stats.total_found),
        stats,
    }))
}

fn process_upload(
    state: &AppState,
    task_id: &str,
    filename: &str,
    data: &[u8],
) -> Result<ScanStats, ApiError> {
    let extracted = shared_doc::extract_text(data).map_err(|_| ApiError::NoUsableText)?;
    tracing::info!("Extraction for task {} succeeded via {}", task_id, extracted.method);

    let report = ScanEngine::new().scan_document(filename, &extracted.text);
    let stats = report.stats();

    let body = scan_engine::report::render(&report);
    std::fs::write(state.report_path(task_id), body).map_err(|e| ApiError::Internal(e.into()))?;

    tracing::info!(
        "Report written for task {}: {} items (numbered {}, paragraph {}, context {})",
        task_id,
        stats.total_found,
        stats.numbered,
        stats.paragraph,
        stats.context
    );

    Ok(stats)
}

/// Stream a previously generated report back as a text attachment
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Result<(StatusCode, [(String, String); 2], Vec<u8>), ApiError> {
    if !is_valid_task_id(&task_id) {
        return Err(ApiError::ReportNotFound(task_id));
    }

    let path = state.report_path(&task_id);
    let body = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::ReportNotFound(task_id.clone()))?;

    Ok((
        StatusCode::OK,
        [
            (
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                "Content-Disposition".to_string(),
                // RFC 5987 encoding of 24년_추출결과_<task_id>.txt
                format!(
                    "attachment; filename=\"report_{task_id}.txt\"; \
                     filename*=UTF-8''24%EB%85%84_%EC%B6%94%EC%B6%9C%EA%B2%B0%EA%B3%BC_{task_id}.txt"
                ),
            ),
        ],
        body,
    ))
}

/// Task ids are the first 8 chars of a UUIDv4
fn generate_task_id() -> String {
    Uuid::new_v4().to_string().chars().take(8).collect()
}

pub fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(stem, ext)| !stem.is_empty() && ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Keep the base name only and strip anything that could escape the storage
/// directory or break a path
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

pub fn is_valid_task_id(task_id: &str) -> bool {
    !task_id.is_empty()
        && task_id.len() <= 36
        && task_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
