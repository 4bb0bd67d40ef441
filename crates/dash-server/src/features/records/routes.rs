//! Record listing API routes
//!
//! # Route Structure
//!
//! - `GET /records` - List records with pagination, status filter, and
//!   free-text search

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::response::ErrorResponse;
use crate::state::DatasetHandle;

use super::queries::list::{ListRecordsError, ListRecordsQuery};

/// Creates the records router
pub fn records_routes() -> Router<DatasetHandle> {
    Router::new().route("/records", get(list_records))
}

/// List records with pagination and filters
///
/// # Endpoint
///
/// `GET /records?limit=20&offset=0&subscription_status=active&q=acme`
///
/// # Query Parameters
///
/// - `limit` - Page size (default: 20, range: 1-100)
/// - `offset` - Records to skip (default: 0)
/// - `subscription_status` - Filter by exact status (`active`/`inactive`)
/// - `q` - Case-insensitive substring match on account label or workflow
///   title
///
/// # Response
///
/// - `200 OK` - `{ "total": <matches before pagination>, "items": [...] }`
/// - `400 Bad Request` - Invalid query parameters
#[tracing::instrument(skip(dataset, query), fields(limit = ?query.limit, offset = ?query.offset))]
async fn list_records(
    State(dataset): State<DatasetHandle>,
    Query(query): Query<ListRecordsQuery>,
) -> Result<Response, ListRecordsError> {
    let snapshot = dataset.snapshot();
    let response = super::queries::list::handle(&snapshot, query)?;

    tracing::debug!(
        count = response.items.len(),
        total = response.total,
        "Records listed via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

impl IntoResponse for ListRecordsError {
    fn into_response(self) -> Response {
        // Every variant is a caller input error
        let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_maps_to_bad_request() {
        let response = ListRecordsError::InvalidLimit.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_routes_structure() {
        let router = records_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
