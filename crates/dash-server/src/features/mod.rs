//! Feature modules implementing the Dash API
//!
//! Each feature is organized as a vertical slice with its own queries,
//! commands (where any exist), and routes.
//!
//! # Features
//!
//! - **records**: paginated record listing with status filter and search
//! - **summary**: aggregate statistics over the loaded dataset
//! - **ingestion**: load report and explicit dataset reload
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `queries/` - Read operations over the current dataset snapshot
//! - `commands/` - Operations that publish a new snapshot (reload only)
//! - `routes.rs` - HTTP route definitions
//!
//! Read handlers capture one snapshot per request and run as pure functions
//! over it, so they are safe concurrently with each other and with reload.

pub mod ingestion;
pub mod records;
pub mod summary;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use crate::state::DatasetHandle;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Handle to the currently published dataset snapshot
    pub dataset: DatasetHandle,
    /// CSV source path used by reload
    pub data_path: Arc<PathBuf>,
}

/// Creates the main API router with all feature routes mounted
///
/// Routes:
/// - `GET /records` - Paginated record listing
/// - `GET /summary` - Aggregate statistics
/// - `GET /ingestion-report` - Load report with invalid-row samples
/// - `POST /reload` - Rebuild and publish the dataset from the CSV source
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(records::records_routes().with_state(state.dataset.clone()))
        .merge(summary::summary_routes().with_state(state.dataset.clone()))
        .merge(ingestion::ingestion_routes().with_state(state))
}
