//! Common types used throughout the connector
//!
//! Shared enums and type aliases used by the catalog, the output channel
//! and the extraction engine.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Sync Mode
// ============================================================================

/// Synchronization mode for streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Full refresh - fetch all data every time
    #[default]
    FullRefresh,
    /// Incremental - only fetch new/updated data
    Incremental,
}

// ============================================================================
// Destination Sync Mode
// ============================================================================

/// How data should be written to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationSyncMode {
    /// Append new records
    #[default]
    Append,
    /// Overwrite existing data
    Overwrite,
    /// Append with deduplication
    AppendDedup,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for connector messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// ============================================================================
// Property Type (for spec)
// ============================================================================

/// Property type for configuration schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
}

// ============================================================================
// Fetch Policy
// ============================================================================

/// How a fetch routine treats a response it cannot use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Undecodable bodies yield zero rows; HTTP status is not inspected
    #[default]
    Lenient,
    /// Undecodable bodies and non-success statuses fail the stream
    Strict,
}
