//! Application state for the Yearscan API

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Shared server state: the directory that holds uploaded inputs and
/// generated reports. Passed explicitly to everything that touches disk;
/// nothing reads the location ambiently after startup.
pub struct AppState {
    storage_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Storage dir from env or the OS temp directory
        let storage_dir = std::env::var("YEARSCAN_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir());
        Self::with_storage_dir(storage_dir)
    }

    pub fn with_storage_dir(storage_dir: impl Into<PathBuf>) -> Result<Self> {
        let storage_dir = storage_dir.into();
        std::fs::create_dir_all(&storage_dir)?;
        tracing::info!("Using storage directory: {}", storage_dir.display());
        Ok(Self { storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Where an uploaded input is parked while the pipeline runs
    pub fn input_path(&self, task_id: &str, filename: &str) -> PathBuf {
        self.storage_dir.join(format!("{task_id}_{filename}"))
    }

    /// Where the generated report lives; download looks it up by task id
    pub fn report_path(&self, task_id: &str) -> PathBuf {
        self.storage_dir.join(format!("output_{task_id}.txt"))
    }
}
