pub mod report;

pub use report::IngestionReportResponse;
