//! State types for tracking sync progress
//!
//! The connector reads state but never produces it: every sync is a full
//! refresh. The type is kept so a host can pass the state of an earlier
//! run without the read failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Previous sync state supplied by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    /// Unix timestamp (seconds) of the last sync
    #[serde(rename = "lastSyncTime")]
    pub last_sync_time: i64,
}

impl SyncState {
    /// Create a state for the given timestamp
    pub fn new(last_sync_time: i64) -> Self {
        Self { last_sync_time }
    }

    /// Last sync time as a UTC datetime, if the timestamp is representable
    pub fn last_sync_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_sync_time, 0)
    }
}
