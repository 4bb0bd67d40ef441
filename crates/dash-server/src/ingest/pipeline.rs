//! Ingestion pipeline
//!
//! Reads every row of the CSV source, runs it through normalization and
//! validation, and partitions the results into the ordered valid and invalid
//! collections of a fresh [`DatasetSnapshot`].
//!
//! The pipeline has no access to the published process state; callers decide
//! when the returned snapshot replaces the live one. Loading the same input
//! twice yields an identical snapshot.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use dash_common::types::InvalidRowReport;

use super::{normalize_row, validate_row, IngestError, EXPECTED_COLUMNS};
use crate::state::DatasetSnapshot;

/// Load the dataset from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<DatasetSnapshot, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Load the dataset from any CSV byte source.
///
/// The header row must carry every expected column label; a missing column
/// fails the whole load. Individual bad rows are recorded and skipped. Rows
/// are numbered 1-based over all data rows in source order, invalid ones
/// included.
pub fn load_reader<R: Read>(reader: R) -> Result<DatasetSnapshot, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = parse_headers(csv_reader.headers()?);
    for col in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(IngestError::MissingColumn(col.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut invalid = Vec::new();

    for (idx, result) in csv_reader.records().enumerate() {
        let row_number = idx + 1;
        // A CSV-level read error (bad encoding, I/O failure) aborts the load
        let record = result?;

        let mut raw = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = match record.get(i) {
                Some(cell) => Value::String(cell.to_string()),
                None => Value::Null,
            };
            raw.insert(header.clone(), value);
        }

        let normalized = normalize_row(raw);
        match validate_row(&normalized) {
            Ok(customer) => records.push(customer),
            Err(error) => {
                warn!(row_number, error = %error, "Skipping invalid row");
                invalid.push(InvalidRowReport {
                    row_number,
                    row: normalized.values,
                    error: error.to_string(),
                });
            },
        }
    }

    debug!(
        loaded = records.len(),
        invalid = invalid.len(),
        "CSV ingestion complete"
    );

    Ok(DatasetSnapshot { records, invalid })
}

/// Extract header labels, tolerating a UTF-8 byte-order mark on the first one.
fn parse_headers(headers: &csv::StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let header = if i == 0 {
                header.trim_start_matches('\u{feff}')
            } else {
                header
            };
            header.to_string()
        })
        .collect()
}
