pub mod list;

pub use list::{ListRecordsError, ListRecordsQuery, RecordsResponse};
