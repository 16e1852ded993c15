//! Engine types
//!
//! Statistics reported by the sync engine.

/// Statistics from a sync operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Total records emitted
    pub records_synced: usize,
    /// Streams fetched without error
    pub streams_synced: usize,
    /// Streams skipped (unsupported sync mode or unknown name)
    pub streams_skipped: usize,
    /// Streams whose fetch failed
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl SyncStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records
    pub fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    /// Add a synced stream
    pub fn add_stream(&mut self) {
        self.streams_synced += 1;
    }

    /// Add a skipped stream
    pub fn add_skipped(&mut self) {
        self.streams_skipped += 1;
    }

    /// Add an error
    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
