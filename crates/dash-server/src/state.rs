//! Process-wide dataset state
//!
//! The loaded dataset is held as an explicitly owned, atomically-swappable
//! snapshot rather than ambient global state. Readers clone an `Arc` to the
//! current snapshot and keep using it for the duration of a request; reload
//! builds a complete replacement and swaps the pointer, so a reader never
//! observes a half-loaded dataset.

use std::sync::{Arc, RwLock};

use dash_common::types::{CustomerRecord, InvalidRowReport};

/// The full in-memory dataset as of the most recent successful load.
///
/// `records` and `invalid` both preserve source row order. Duplicate account
/// UUIDs are retained as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSnapshot {
    pub records: Vec<CustomerRecord>,
    pub invalid: Vec<InvalidRowReport>,
}

/// Shared handle to the current [`DatasetSnapshot`].
///
/// Cloning the handle is cheap; all clones observe the same snapshot. The
/// inner lock is held only long enough to clone or swap the `Arc`.
#[derive(Clone)]
pub struct DatasetHandle {
    inner: Arc<RwLock<Arc<DatasetSnapshot>>>,
}

impl DatasetHandle {
    /// Create a handle owning the given snapshot
    pub fn new(snapshot: DatasetSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Arc<DatasetSnapshot> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically publish a new snapshot, replacing the previous one
    ///
    /// Readers holding an `Arc` from before the swap keep their consistent
    /// view; new readers see the replacement.
    pub fn replace(&self, snapshot: DatasetSnapshot) {
        let next = Arc::new(snapshot);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_common::types::SubscriptionStatus;
    use uuid::Uuid;

    fn record(label: &str) -> CustomerRecord {
        CustomerRecord {
            account_uuid: Uuid::new_v4(),
            account_label: label.to_string(),
            subscription_status: SubscriptionStatus::Active,
            admin_seats: 0,
            user_seats: 0,
            read_only_seats: 0,
            total_records: 0,
            automation_count: 0,
            workflow_title: None,
            messages_processed: 0,
            notifications_sent: 0,
            notifications_billed: 0,
        }
    }

    #[test]
    fn test_handle_starts_with_initial_snapshot() {
        let handle = DatasetHandle::new(DatasetSnapshot::default());
        assert!(handle.snapshot().records.is_empty());
        assert!(handle.snapshot().invalid.is_empty());
    }

    #[test]
    fn test_replace_swaps_snapshot_for_new_readers() {
        let handle = DatasetHandle::new(DatasetSnapshot::default());

        handle.replace(DatasetSnapshot {
            records: vec![record("Acme Corp")],
            invalid: vec![],
        });

        let current = handle.snapshot();
        assert_eq!(current.records.len(), 1);
        assert_eq!(current.records[0].account_label, "Acme Corp");
    }

    #[test]
    fn test_existing_readers_keep_their_view_across_replace() {
        let handle = DatasetHandle::new(DatasetSnapshot {
            records: vec![record("Old")],
            invalid: vec![],
        });

        let before = handle.snapshot();
        handle.replace(DatasetSnapshot {
            records: vec![record("New"), record("Newer")],
            invalid: vec![],
        });

        assert_eq!(before.records[0].account_label, "Old");
        assert_eq!(handle.snapshot().records.len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let handle = DatasetHandle::new(DatasetSnapshot::default());
        let other = handle.clone();

        handle.replace(DatasetSnapshot {
            records: vec![record("Shared")],
            invalid: vec![],
        });

        assert_eq!(other.snapshot().records.len(), 1);
    }
}
