//! CSV ingestion pipeline
//!
//! Turns the raw customer accounts CSV into the process-wide dataset:
//!
//! - **normalize**: per-row cleanup (status casing, blank-to-null text,
//!   numeric coercion)
//! - **validate**: schema constraints producing a typed [`CustomerRecord`]
//!   or a structured per-field failure
//! - **pipeline**: reads all rows, partitions them into ordered valid and
//!   invalid collections, and builds a [`crate::state::DatasetSnapshot`]
//!
//! Row-level failures never abort a load; only an unreadable source or a
//! missing required header does.
//!
//! [`CustomerRecord`]: dash_common::types::CustomerRecord

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod normalize;
pub mod pipeline;
pub mod validate;

pub use normalize::{normalize_row, NormalizedRow};
pub use pipeline::{load_path, load_reader};
pub use validate::{validate_row, RowValidationError};

// ============================================================================
// CSV Schema
// ============================================================================

pub const COL_ACCOUNT_UUID: &str = "Account UUID";
pub const COL_ACCOUNT_LABEL: &str = "Account Label";
pub const COL_SUBSCRIPTION_STATUS: &str = "Subscription Status";
pub const COL_ADMIN_SEATS: &str = "Admin Seats";
pub const COL_USER_SEATS: &str = "User Seats";
pub const COL_READ_ONLY_SEATS: &str = "Read Only Seats";
pub const COL_TOTAL_RECORDS: &str = "Total Records";
pub const COL_AUTOMATION_COUNT: &str = "Automation Count";
pub const COL_WORKFLOW_TITLE: &str = "Workflow Title";
pub const COL_MESSAGES_PROCESSED: &str = "Messages Processed";
pub const COL_NOTIFICATIONS_SENT: &str = "Notifications Sent";
pub const COL_NOTIFICATIONS_BILLED: &str = "Notifications Billed";

/// The eight counter columns subject to numeric coercion.
pub const NUMERIC_COLUMNS: [&str; 8] = [
    COL_ADMIN_SEATS,
    COL_USER_SEATS,
    COL_READ_ONLY_SEATS,
    COL_TOTAL_RECORDS,
    COL_AUTOMATION_COUNT,
    COL_MESSAGES_PROCESSED,
    COL_NOTIFICATIONS_SENT,
    COL_NOTIFICATIONS_BILLED,
];

/// Every column the CSV header must carry, in canonical order.
pub const EXPECTED_COLUMNS: [&str; 12] = [
    COL_ACCOUNT_UUID,
    COL_ACCOUNT_LABEL,
    COL_SUBSCRIPTION_STATUS,
    COL_ADMIN_SEATS,
    COL_USER_SEATS,
    COL_READ_ONLY_SEATS,
    COL_TOTAL_RECORDS,
    COL_AUTOMATION_COUNT,
    COL_WORKFLOW_TITLE,
    COL_MESSAGES_PROCESSED,
    COL_NOTIFICATIONS_SENT,
    COL_NOTIFICATIONS_BILLED,
];

// ============================================================================
// Errors
// ============================================================================

/// A single violated constraint on one column of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that abort an entire load.
///
/// Row-level problems are not represented here; they become
/// [`InvalidRowReport`](dash_common::types::InvalidRowReport) entries and the
/// load continues.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open dataset file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column '{0}' in CSV header")]
    MissingColumn(String),

    #[error("failed to read CSV data: {0}")]
    Csv(#[from] csv::Error),
}
