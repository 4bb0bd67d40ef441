//! Ingestion feature
//!
//! Exposes the outcome of the most recent load (report query) and the
//! explicit reload command that rebuilds the dataset from the CSV source.

pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::reload::{ReloadError, ReloadResponse};
pub use queries::report::IngestionReportResponse;
pub use routes::ingestion_routes;
