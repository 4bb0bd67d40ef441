use serde::{Deserialize, Serialize};

use dash_common::types::{CustomerRecord, ParseSubscriptionStatusError, SubscriptionStatus};

use crate::state::DatasetSnapshot;

/// Default page size when the caller omits `limit`
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest allowed page size
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListRecordsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsResponse {
    pub total: usize,
    pub items: Vec<CustomerRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListRecordsError {
    #[error("Limit must be between 1 and {MAX_LIMIT}")]
    InvalidLimit,
    #[error("Offset must be greater than or equal to 0")]
    InvalidOffset,
    #[error(transparent)]
    InvalidStatus(#[from] ParseSubscriptionStatusError),
}

impl ListRecordsQuery {
    pub fn validate(&self) -> Result<(), ListRecordsError> {
        if let Some(limit) = self.limit {
            if limit < 1 || limit > MAX_LIMIT {
                return Err(ListRecordsError::InvalidLimit);
            }
        }
        if let Some(offset) = self.offset {
            if offset < 0 {
                return Err(ListRecordsError::InvalidOffset);
            }
        }
        Ok(())
    }

    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

/// Filter, search, and paginate the valid-record collection.
///
/// `total` counts all matches before the pagination window is applied; an
/// offset past the end yields an empty page, not an error.
#[tracing::instrument(skip(snapshot))]
pub fn handle(
    snapshot: &DatasetSnapshot,
    query: ListRecordsQuery,
) -> Result<RecordsResponse, ListRecordsError> {
    query.validate()?;

    let status = query
        .subscription_status
        .as_deref()
        .map(str::parse::<SubscriptionStatus>)
        .transpose()?;
    let needle = query.q.as_deref().map(|q| q.trim().to_lowercase());

    let matches: Vec<&CustomerRecord> = snapshot
        .records
        .iter()
        .filter(|record| status.map_or(true, |s| record.subscription_status == s))
        .filter(|record| match &needle {
            None => true,
            Some(needle) => {
                record.account_label.to_lowercase().contains(needle)
                    || record
                        .workflow_title
                        .as_deref()
                        .is_some_and(|title| title.to_lowercase().contains(needle))
            },
        })
        .collect();

    let total = matches.len();
    let items = matches
        .into_iter()
        .skip(query.offset() as usize)
        .take(query.limit() as usize)
        .cloned()
        .collect();

    Ok(RecordsResponse { total, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(label: &str, status: SubscriptionStatus, title: Option<&str>) -> CustomerRecord {
        CustomerRecord {
            account_uuid: Uuid::new_v4(),
            account_label: label.to_string(),
            subscription_status: status,
            admin_seats: 1,
            user_seats: 5,
            read_only_seats: 2,
            total_records: 100,
            automation_count: 0,
            workflow_title: title.map(str::to_string),
            messages_processed: 0,
            notifications_sent: 0,
            notifications_billed: 0,
        }
    }

    fn snapshot() -> DatasetSnapshot {
        DatasetSnapshot {
            records: vec![
                record("Acme Corp", SubscriptionStatus::Active, None),
                record("Globex", SubscriptionStatus::Inactive, Some("Acme import")),
                record("Initech", SubscriptionStatus::Active, Some("Payroll sync")),
            ],
            invalid: vec![],
        }
    }

    fn query() -> ListRecordsQuery {
        ListRecordsQuery::default()
    }

    #[test]
    fn test_defaults_return_everything_in_order() {
        let response = handle(&snapshot(), query()).unwrap();
        assert_eq!(response.total, 3);
        let labels: Vec<&str> = response
            .items
            .iter()
            .map(|r| r.account_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Acme Corp", "Globex", "Initech"]);
    }

    #[test]
    fn test_validation_rejects_limit_out_of_range() {
        let mut low = query();
        low.limit = Some(0);
        assert!(matches!(
            handle(&snapshot(), low),
            Err(ListRecordsError::InvalidLimit)
        ));

        let mut high = query();
        high.limit = Some(101);
        assert!(matches!(
            handle(&snapshot(), high),
            Err(ListRecordsError::InvalidLimit)
        ));
    }

    #[test]
    fn test_validation_rejects_negative_offset() {
        let mut q = query();
        q.offset = Some(-1);
        assert!(matches!(
            handle(&snapshot(), q),
            Err(ListRecordsError::InvalidOffset)
        ));
    }

    #[test]
    fn test_unknown_status_is_a_caller_error() {
        let mut q = query();
        q.subscription_status = Some("paused".to_string());
        assert!(matches!(
            handle(&snapshot(), q),
            Err(ListRecordsError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_status_filter() {
        let mut q = query();
        q.subscription_status = Some("active".to_string());
        let response = handle(&snapshot(), q).unwrap();
        assert_eq!(response.total, 2);
        assert!(response
            .items
            .iter()
            .all(|r| r.subscription_status == SubscriptionStatus::Active));
    }

    #[test]
    fn test_search_matches_label_case_insensitively() {
        let mut q = query();
        q.q = Some("acme".to_string());
        let response = handle(&snapshot(), q).unwrap();
        // Matches "Acme Corp" by label and "Globex" by workflow title
        assert_eq!(response.total, 2);
    }

    #[test]
    fn test_search_trims_the_query() {
        let mut q = query();
        q.q = Some("  ACME  ".to_string());
        let response = handle(&snapshot(), q).unwrap();
        assert_eq!(response.total, 2);
    }

    #[test]
    fn test_search_with_no_match_excludes_all() {
        let mut q = query();
        q.q = Some("nomatch".to_string());
        let response = handle(&snapshot(), q).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_filter_and_search_combine() {
        let mut q = query();
        q.subscription_status = Some("active".to_string());
        q.q = Some("acme".to_string());
        let response = handle(&snapshot(), q).unwrap();
        // Globex matches the search but not the status filter
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].account_label, "Acme Corp");
    }

    #[test]
    fn test_pagination_window() {
        let mut q = query();
        q.limit = Some(2);
        q.offset = Some(1);
        let response = handle(&snapshot(), q).unwrap();
        assert_eq!(response.total, 3);
        let labels: Vec<&str> = response
            .items
            .iter()
            .map(|r| r.account_label.as_str())
            .collect();
        assert_eq!(labels, vec!["Globex", "Initech"]);
    }

    #[test]
    fn test_offset_past_the_end_yields_empty_page() {
        let mut q = query();
        q.offset = Some(50);
        let response = handle(&snapshot(), q).unwrap();
        assert_eq!(response.total, 3);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let response = handle(&DatasetSnapshot::default(), query()).unwrap();
        assert_eq!(response.total, 0);
        assert!(response.items.is_empty());
    }
}
