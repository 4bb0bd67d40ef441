//! Ingestion API routes
//!
//! # Route Structure
//!
//! - `GET /ingestion-report` - Outcome of the most recent load
//! - `POST /reload` - Rebuild and publish the dataset from the CSV source

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::api::response::ErrorResponse;
use crate::features::FeatureState;

use super::commands::reload::ReloadError;

/// Creates the ingestion router
pub fn ingestion_routes() -> Router<FeatureState> {
    Router::new()
        .route("/ingestion-report", get(ingestion_report))
        .route("/reload", post(reload))
}

/// Report the outcome of the most recent load
///
/// # Endpoint
///
/// `GET /ingestion-report`
///
/// # Response
///
/// - `200 OK` - loaded/invalid counts plus the first invalid-row samples
#[tracing::instrument(skip(state))]
async fn ingestion_report(State(state): State<FeatureState>) -> impl IntoResponse {
    let snapshot = state.dataset.snapshot();
    let report = super::queries::report::handle(&snapshot);
    (StatusCode::OK, Json(report))
}

/// Rebuild the dataset from the configured CSV source
///
/// # Endpoint
///
/// `POST /reload`
///
/// # Response
///
/// - `200 OK` - new snapshot published; loaded/invalid counts returned
/// - `500 Internal Server Error` - source unreadable; previous snapshot
///   stays live
#[tracing::instrument(skip(state))]
async fn reload(State(state): State<FeatureState>) -> Result<Response, ReloadError> {
    let response =
        super::commands::reload::handle(state.dataset.clone(), state.data_path.clone()).await?;
    Ok((StatusCode::OK, Json(response)).into_response())
}

impl IntoResponse for ReloadError {
    fn into_response(self) -> Response {
        tracing::error!("Dataset reload failed: {}", self);
        let error = ErrorResponse::new("INGEST_ERROR", self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
    }
}
