pub mod reload;

pub use reload::{ReloadError, ReloadResponse};
