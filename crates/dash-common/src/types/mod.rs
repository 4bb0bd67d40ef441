//! Common types used across Dash
//!
//! Domain types for the customer account dataset: the typed record produced
//! by ingestion, the subscription status enum, and the report entry kept for
//! rows that failed validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Subscription state of a customer account.
///
/// The CSV source carries this as free text; ingestion normalizes it to
/// lowercase before parsing, so only the two exact values below are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Inactive,
}

impl SubscriptionStatus {
    /// The wire/CSV representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a recognized subscription status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid subscription status: '{0}' (expected 'active' or 'inactive')")]
pub struct ParseSubscriptionStatusError(pub String);

impl std::str::FromStr for SubscriptionStatus {
    type Err = ParseSubscriptionStatusError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "inactive" => Ok(SubscriptionStatus::Inactive),
            other => Err(ParseSubscriptionStatusError(other.to_string())),
        }
    }
}

/// A validated customer account record.
///
/// One record per CSV data row that passed normalization and validation.
/// All counters are validated to be non-negative at ingestion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub account_uuid: Uuid,
    pub account_label: String,
    pub subscription_status: SubscriptionStatus,
    pub admin_seats: i64,
    pub user_seats: i64,
    pub read_only_seats: i64,
    pub total_records: i64,
    pub automation_count: i64,
    pub workflow_title: Option<String>,
    pub messages_processed: i64,
    pub notifications_sent: i64,
    pub notifications_billed: i64,
}

/// Report entry for a CSV row that failed validation.
///
/// `row` holds the row mapping as normalized-so-far (column label to value),
/// so the offending input can be located and fixed. `row_number` is the
/// 1-based position among all data rows in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidRowReport {
    pub row_number: usize,
    pub row: serde_json::Map<String, serde_json::Value>,
    pub error: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "active".parse::<SubscriptionStatus>().unwrap(),
            SubscriptionStatus::Active
        );
        assert_eq!(
            "inactive".parse::<SubscriptionStatus>().unwrap(),
            SubscriptionStatus::Inactive
        );
    }

    #[test]
    fn test_status_rejects_unknown_values() {
        assert!("pending".parse::<SubscriptionStatus>().is_err());
        assert!("".parse::<SubscriptionStatus>().is_err());
        // Parsing happens after normalization, so case variants are invalid here
        assert!("Active".parse::<SubscriptionStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SubscriptionStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }

    #[test]
    fn test_customer_record_json_shape() {
        let record = CustomerRecord {
            account_uuid: Uuid::nil(),
            account_label: "Acme Corp".to_string(),
            subscription_status: SubscriptionStatus::Active,
            admin_seats: 1,
            user_seats: 10,
            read_only_seats: 5,
            total_records: 1000,
            automation_count: 3,
            workflow_title: None,
            messages_processed: 42,
            notifications_sent: 7,
            notifications_billed: 6,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["account_label"], "Acme Corp");
        assert_eq!(value["subscription_status"], "active");
        // Optional title is emitted as an explicit null
        assert!(value["workflow_title"].is_null());
    }
}
