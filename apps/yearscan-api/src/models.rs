//! Data models for the Yearscan API

use serde::{Deserialize, Serialize};
use shared_types::ScanStats;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Response after a successful upload and scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub task_id: String,
    pub message: String,
    pub stats: ScanStats,
}
