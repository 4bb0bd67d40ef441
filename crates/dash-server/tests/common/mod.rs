//! Shared fixtures and helpers for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use axum::Router;
use serde_json::Value;
use tempfile::NamedTempFile;

use dash_server::{api, config::Config, ingest, state::DatasetHandle};

/// The canonical CSV header row
pub const HEADER: &str = "Account UUID,Account Label,Subscription Status,Admin Seats,User Seats,Read Only Seats,Total Records,Automation Count,Workflow Title,Messages Processed,Notifications Sent,Notifications Billed";

/// Fixture with five valid rows (rows 1-5) and two invalid rows (rows 6-7).
///
/// Exercises the normalization edge cases: untrimmed mixed-case status,
/// fractional counter, blank counter, blank workflow title.
pub const SAMPLE_CSV: &str = "\
Account UUID,Account Label,Subscription Status,Admin Seats,User Seats,Read Only Seats,Total Records,Automation Count,Workflow Title,Messages Processed,Notifications Sent,Notifications Billed
11111111-1111-1111-1111-111111111111,Acme Corp,active,1,10,5,1000,3,Lead Sync,100,20,18
22222222-2222-2222-2222-222222222222,Globex,inactive,2,4,1,250,0,,40,5,5
33333333-3333-3333-3333-333333333333,Initech, Active ,0,2,0,50,1,Acme Migration,10,2,2
44444444-4444-4444-4444-444444444444,Umbrella,active,1,3.9,0,12,0,,5,1,1
55555555-5555-5555-5555-555555555555,Stark Industries,inactive,0,1,0,5,,Quarterly Review,2,0,0
not-a-uuid,Wayne Corp,active,1,1,1,1,1,,1,1,1
66666666-6666-6666-6666-666666666666,Cyberdyne,pending,1,1,1,abc,1,,1,1,1
";

/// Write CSV contents to a fresh temporary file
pub fn write_temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Build the full application router on top of a CSV fixture.
///
/// Returns the temp file too so tests can rewrite it and exercise reload.
pub fn app_with_csv(contents: &str) -> (Router, NamedTempFile) {
    let file = write_temp_csv(contents);
    let mut config = Config::default();
    config.data.path = PathBuf::from(file.path());

    let snapshot = ingest::load_path(file.path()).unwrap();
    let app = api::create_router(&config, DatasetHandle::new(snapshot));
    (app, file)
}

/// Collect a response body as JSON
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
