//! Record listing feature
//!
//! Read-only queries over the valid-record collection: status filtering,
//! free-text search, and limit/offset pagination.

pub mod queries;
pub mod routes;

pub use queries::list::{ListRecordsError, ListRecordsQuery, RecordsResponse};
pub use routes::records_routes;
