//! Summary API routes
//!
//! # Route Structure
//!
//! - `GET /summary` - Aggregate statistics over the loaded dataset

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::state::DatasetHandle;

/// Creates the summary router
pub fn summary_routes() -> Router<DatasetHandle> {
    Router::new().route("/summary", get(get_summary))
}

/// Aggregate statistics over the full dataset
///
/// # Endpoint
///
/// `GET /summary`
///
/// # Response
///
/// - `200 OK` - counts by status and sums of the reporting counters
#[tracing::instrument(skip(dataset))]
async fn get_summary(State(dataset): State<DatasetHandle>) -> impl IntoResponse {
    let snapshot = dataset.snapshot();
    let summary = super::queries::summarize::handle(&snapshot);
    (StatusCode::OK, Json(summary))
}
