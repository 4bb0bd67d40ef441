use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ingest::{self, IngestError};
use crate::state::DatasetHandle;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub loaded_records: usize,
    pub invalid_rows: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("Reload task failed: {0}")]
    Task(String),
}

/// Rebuild the dataset from the CSV source and publish it.
///
/// The new snapshot is built completely before it replaces the live one, so
/// concurrent readers never observe a partial load. On failure nothing is
/// published and the previous snapshot stays live.
#[tracing::instrument(skip(dataset), fields(path = %path.display()))]
pub async fn handle(
    dataset: DatasetHandle,
    path: Arc<PathBuf>,
) -> Result<ReloadResponse, ReloadError> {
    // The CSV read is blocking file I/O; keep it off the async runtime
    let snapshot = tokio::task::spawn_blocking(move || ingest::load_path(&path))
        .await
        .map_err(|e| ReloadError::Task(e.to_string()))??;

    let response = ReloadResponse {
        loaded_records: snapshot.records.len(),
        invalid_rows: snapshot.invalid.len(),
    };

    dataset.replace(snapshot);

    tracing::info!(
        loaded = response.loaded_records,
        invalid = response.invalid_rows,
        "Dataset reloaded"
    );

    Ok(response)
}
