//! Record validation
//!
//! Applies the schema constraints to a normalized row and produces either a
//! typed [`CustomerRecord`] or a [`RowValidationError`] collecting every
//! violated field. Validation never panics and never stops at the first
//! failure, so one report is enough to find and fix an offending row.

use serde_json::{Map, Value};
use uuid::Uuid;

use dash_common::types::{CustomerRecord, SubscriptionStatus};

use super::normalize::NormalizedRow;
use super::{
    FieldError, COL_ACCOUNT_LABEL, COL_ACCOUNT_UUID, COL_ADMIN_SEATS, COL_AUTOMATION_COUNT,
    COL_MESSAGES_PROCESSED, COL_NOTIFICATIONS_BILLED, COL_NOTIFICATIONS_SENT, COL_READ_ONLY_SEATS,
    COL_SUBSCRIPTION_STATUS, COL_TOTAL_RECORDS, COL_USER_SEATS, COL_WORKFLOW_TITLE,
};

/// All constraints a row violated, combined into one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowValidationError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for RowValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for RowValidationError {}

/// Validate a normalized row against the account schema.
///
/// Coercion failures recorded during normalization are carried into the
/// result alongside any constraint violations found here.
pub fn validate_row(row: &NormalizedRow) -> Result<CustomerRecord, RowValidationError> {
    let mut errors = row.coercion_errors.clone();
    let values = &row.values;

    let account_uuid = match values.get(COL_ACCOUNT_UUID).and_then(Value::as_str) {
        Some(raw) if !raw.is_empty() => match Uuid::parse_str(raw) {
            Ok(uuid) => Some(uuid),
            Err(_) => {
                errors.push(FieldError::new(
                    COL_ACCOUNT_UUID,
                    format!("'{}' is not a valid UUID", raw),
                ));
                None
            },
        },
        _ => {
            errors.push(FieldError::new(COL_ACCOUNT_UUID, "is required"));
            None
        },
    };

    let account_label = match values.get(COL_ACCOUNT_LABEL).and_then(Value::as_str) {
        Some(raw) if !raw.trim().is_empty() => Some(raw.to_string()),
        _ => {
            errors.push(FieldError::new(
                COL_ACCOUNT_LABEL,
                "is required and must be non-empty",
            ));
            None
        },
    };

    // Normalization guarantees a string here, possibly empty
    let status_raw = values
        .get(COL_SUBSCRIPTION_STATUS)
        .and_then(Value::as_str)
        .unwrap_or_default();
    let subscription_status = match status_raw.parse::<SubscriptionStatus>() {
        Ok(status) => Some(status),
        Err(err) => {
            errors.push(FieldError::new(COL_SUBSCRIPTION_STATUS, err.to_string()));
            None
        },
    };

    let admin_seats = count_field(values, COL_ADMIN_SEATS, &mut errors);
    let user_seats = count_field(values, COL_USER_SEATS, &mut errors);
    let read_only_seats = count_field(values, COL_READ_ONLY_SEATS, &mut errors);
    let total_records = count_field(values, COL_TOTAL_RECORDS, &mut errors);
    let automation_count = count_field(values, COL_AUTOMATION_COUNT, &mut errors);
    let messages_processed = count_field(values, COL_MESSAGES_PROCESSED, &mut errors);
    let notifications_sent = count_field(values, COL_NOTIFICATIONS_SENT, &mut errors);
    let notifications_billed = count_field(values, COL_NOTIFICATIONS_BILLED, &mut errors);

    let workflow_title = values
        .get(COL_WORKFLOW_TITLE)
        .and_then(Value::as_str)
        .map(str::to_string);

    match (account_uuid, account_label, subscription_status) {
        (Some(account_uuid), Some(account_label), Some(subscription_status))
            if errors.is_empty() =>
        {
            Ok(CustomerRecord {
                account_uuid,
                account_label,
                subscription_status,
                admin_seats,
                user_seats,
                read_only_seats,
                total_records,
                automation_count,
                workflow_title,
                messages_processed,
                notifications_sent,
                notifications_billed,
            })
        },
        _ => Err(RowValidationError { errors }),
    }
}

/// Extract a non-negative counter, recording a field error on violation.
///
/// Columns whose coercion already failed are skipped; their error is in the
/// list once.
fn count_field(values: &Map<String, Value>, col: &str, errors: &mut Vec<FieldError>) -> i64 {
    if errors.iter().any(|e| e.field == col) {
        return 0;
    }
    match values.get(col).and_then(Value::as_i64) {
        Some(count) if count >= 0 => count,
        Some(count) => {
            errors.push(FieldError::new(
                col,
                format!("must be greater than or equal to 0, got {}", count),
            ));
            0
        },
        None => {
            errors.push(FieldError::new(col, "is required and must be a number"));
            0
        },
    }
}
