//! Dash Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the Dash project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all Dash workspace
//! members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Tracing configuration and initialization
//! - **Types**: Shared domain types for customer account records
//!
//! # Example
//!
//! ```no_run
//! use dash_common::types::SubscriptionStatus;
//!
//! let status: SubscriptionStatus = "active".parse()?;
//! assert_eq!(status.as_str(), "active");
//! # Ok::<(), dash_common::types::ParseSubscriptionStatusError>(())
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{DashError, Result};
