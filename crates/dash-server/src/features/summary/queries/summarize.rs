use serde::{Deserialize, Serialize};

use dash_common::types::SubscriptionStatus;

use crate::state::DatasetSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub total_accounts: i64,
    pub active_accounts: i64,
    pub inactive_accounts: i64,
    pub total_records_sum: i64,
    pub user_seats_sum: i64,
    pub read_only_seats_sum: i64,
}

/// Compute summary statistics over the full valid-record collection.
///
/// No filtering is applied; an empty dataset yields all zeros.
#[tracing::instrument(skip(snapshot))]
pub fn handle(snapshot: &DatasetSnapshot) -> SummaryResponse {
    let mut summary = SummaryResponse::default();

    for record in &snapshot.records {
        summary.total_accounts += 1;
        match record.subscription_status {
            SubscriptionStatus::Active => summary.active_accounts += 1,
            SubscriptionStatus::Inactive => summary.inactive_accounts += 1,
        }
        summary.total_records_sum += record.total_records;
        summary.user_seats_sum += record.user_seats;
        summary.read_only_seats_sum += record.read_only_seats;
    }

    summary
}
