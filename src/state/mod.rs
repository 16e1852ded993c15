//! State module
//!
//! Holds the previous-sync state document a host may pass to `read`.

mod types;

pub use types::SyncState;
