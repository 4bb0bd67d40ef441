//! Summary feature
//!
//! Aggregate statistics over the full valid-record collection.

pub mod queries;
pub mod routes;

pub use queries::summarize::SummaryResponse;
pub use routes::summary_routes;
