//! Error types for the Yearscan API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("파일이 없습니다")]
    MissingFile,

    #[error("파일이 선택되지 않았습니다")]
    EmptyFilename,

    #[error("TXT, HWP, HWPX 파일만 업로드 가능합니다")]
    UnsupportedExtension,

    #[error("파일을 읽을 수 없습니다")]
    NoUsableText,

    #[error("파일을 찾을 수 없습니다: {0}")]
    ReportNotFound(String),

    #[error("업로드 형식 오류: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("처리 중 오류 발생: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Remediation hint surfaced alongside validation failures
    fn hint(&self) -> Option<&'static str> {
        match self {
            ApiError::UnsupportedExtension => Some(
                "한글에서 \"파일 > 다른 이름으로 저장\"으로 TXT 또는 HWPX 형식으로 저장 후 업로드하세요",
            ),
            ApiError::NoUsableText => Some("파일 인코딩을 확인해주세요"),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFile
            | ApiError::EmptyFilename
            | ApiError::UnsupportedExtension
            | ApiError::NoUsableText
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::ReportNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        if let Some(hint) = self.hint() {
            body["hint"] = json!(hint);
        }

        (status, Json(body)).into_response()
    }
}
