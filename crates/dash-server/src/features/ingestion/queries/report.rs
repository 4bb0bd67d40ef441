use serde::{Deserialize, Serialize};

use dash_common::types::InvalidRowReport;

use crate::state::DatasetSnapshot;

/// How many invalid rows the report includes verbatim
pub const INVALID_SAMPLE_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionReportResponse {
    pub loaded_records: usize,
    pub invalid_rows: usize,
    pub invalid_samples: Vec<InvalidRowReport>,
}

/// Report the outcome of the most recent load.
///
/// Counts cover every input row; the samples are the first few invalid rows
/// in source order.
#[tracing::instrument(skip(snapshot))]
pub fn handle(snapshot: &DatasetSnapshot) -> IngestionReportResponse {
    IngestionReportResponse {
        loaded_records: snapshot.records.len(),
        invalid_rows: snapshot.invalid.len(),
        invalid_samples: snapshot
            .invalid
            .iter()
            .take(INVALID_SAMPLE_LIMIT)
            .cloned()
            .collect(),
    }
}
