//! Dash Server Library
//!
//! HTTP reporting backend for a customer account dataset.
//!
//! # Overview
//!
//! The Dash server loads a CSV snapshot of customer accounts at startup,
//! validates and normalizes every row, and serves the resulting in-memory
//! dataset through read-only endpoints:
//!
//! - **Records**: paginated listing with status filter and free-text search
//! - **Summary**: aggregate statistics over the full dataset
//! - **Ingestion**: load report and explicit reload
//! - **Configuration**: environment-based configuration management
//! - **Middleware**: CORS, request tracing, and response compression
//!
//! # Architecture
//!
//! Ingestion is the single writer: it builds a complete [`state::DatasetSnapshot`]
//! off to the side and publishes it atomically through a [`state::DatasetHandle`].
//! Every query handler is a pure function over the snapshot it captured, so
//! reads run concurrently with each other and with reload.
//!
//! Features follow a vertical-slice layout: each feature owns its queries,
//! commands, and routes, wired to plain `handle` functions that take the
//! snapshot and a validated query value.
//!
//! ## Framework Stack
//!
//! - **Axum**: Modern, ergonomic web framework
//! - **csv**: CSV parsing for the ingestion pipeline
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use dash_server::{api, config::Config, ingest, state::DatasetHandle};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let snapshot = ingest::load_path(&config.data.path)?;
//!     api::serve(config, DatasetHandle::new(snapshot)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod features;
pub mod ingest;
pub mod middleware;
pub mod state;

// Re-export commonly used types
pub use state::{DatasetHandle, DatasetSnapshot};
