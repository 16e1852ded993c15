//! Configuration types for the connector
//!
//! This module contains the user configuration document, the runtime
//! settings of the source, the catalog structures exchanged with the host
//! and the property model used to render the connector specification.

use crate::error::{Error, Result};
use crate::schema::StreamSchema;
use crate::types::{DestinationSyncMode, FetchPolicy, JsonValue, PropertyType, SyncMode};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

// ============================================================================
// User Configuration
// ============================================================================

/// Smallest accepted `numElements`
pub const MIN_ELEMENTS: i64 = 1;

/// Largest accepted `numElements`
pub const MAX_ELEMENTS: i64 = 100;

/// Run-time configuration supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Number of elements requested per stream
    #[serde(rename = "numElements")]
    pub num_elements: i64,
}

impl Configuration {
    /// Create a configuration
    pub fn new(num_elements: i64) -> Self {
        Self { num_elements }
    }

    /// Check `numElements` against the accepted bounds
    pub fn validate(&self) -> Result<()> {
        if self.num_elements < MIN_ELEMENTS {
            return Err(Error::config_range(
                "numElements",
                "must be a positive value greater than 0",
            ));
        }
        if self.num_elements > MAX_ELEMENTS {
            return Err(Error::config_range("numElements", "cannot exceed 100 elements"));
        }
        Ok(())
    }
}

// ============================================================================
// Source Settings
// ============================================================================

/// Base URL of the public random-data API
pub const DEFAULT_BASE_URL: &str = "https://random-data-api.com/";

/// Runtime settings of the source (not part of the user configuration)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Base URL of the remote API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Connection timeout in seconds
    pub connect_timeout_seconds: u64,

    /// Treatment of unusable fetch responses
    pub fetch_policy: FetchPolicy,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            fetch_policy: FetchPolicy::default(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl SourceSettings {
    /// Create settings pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, seconds: u64) -> Self {
        self.connect_timeout_seconds = seconds;
        self
    }

    /// Set the fetch policy
    #[must_use]
    pub fn with_fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.fetch_policy = policy;
        self
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Connection timeout as a duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

// ============================================================================
// Spec Config (for UI)
// ============================================================================

/// Configuration specification for connector setup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Schema title
    #[serde(default)]
    pub title: Option<String>,

    /// Configuration properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyConfig>,
}

/// Configuration property definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Property type
    #[serde(rename = "type", default)]
    pub property_type: PropertyType,

    /// Human-readable title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Property description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether this property is required
    #[serde(default, skip_serializing)]
    pub required: bool,

    /// Inclusive lower bound (numeric properties)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    /// Inclusive upper bound (numeric properties)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    /// Example values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<serde_json::Value>,
}

impl SpecConfig {
    /// Render the properties as a draft-07 JSON Schema object
    pub fn to_json_schema(&self) -> serde_json::Value {
        let required: Vec<&String> = self
            .properties
            .iter()
            .filter(|(_, p)| p.required)
            .map(|(name, _)| name)
            .collect();

        serde_json::json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": self.title,
            "type": "object",
            "required": required,
            "additionalProperties": true,
            "properties": self.properties,
        })
    }
}

// ============================================================================
// Catalog Types
// ============================================================================

/// Discovered catalog (available streams)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Available streams
    pub streams: Vec<CatalogStream>,
}

impl Catalog {
    /// Find a stream by name
    pub fn stream(&self, name: &str) -> Option<&CatalogStream> {
        self.streams.iter().find(|s| s.name == name)
    }

    /// Select every stream with the given sync mode
    pub fn to_configured(&self, sync_mode: SyncMode) -> ConfiguredCatalog {
        ConfiguredCatalog {
            streams: self
                .streams
                .iter()
                .map(|s| ConfiguredStream::new(StreamReference::from(s), sync_mode))
                .collect(),
        }
    }
}

/// Stream in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStream {
    /// Stream name
    pub name: String,

    /// Stream namespace
    #[serde(default, deserialize_with = "null_as_empty")]
    pub namespace: String,

    /// JSON schema for the stream
    #[serde(default)]
    pub json_schema: StreamSchema,

    /// Supported sync modes
    #[serde(default)]
    pub supported_sync_modes: Vec<SyncMode>,

    /// Whether the source defines its own cursor
    #[serde(default)]
    pub source_defined_cursor: bool,
}

impl CatalogStream {
    /// Check whether the stream supports the sync mode
    pub fn supports(&self, mode: SyncMode) -> bool {
        self.supported_sync_modes.contains(&mode)
    }
}

/// Stream as referenced by a configured catalog
///
/// The host's schema is carried as opaque JSON; only the name, namespace and
/// sync modes are read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamReference {
    /// Stream name
    pub name: String,

    /// Stream namespace
    #[serde(default, deserialize_with = "null_as_empty")]
    pub namespace: String,

    /// JSON schema as sent by the host
    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub json_schema: JsonValue,

    /// Supported sync modes
    #[serde(default)]
    pub supported_sync_modes: Vec<SyncMode>,

    /// Whether the source defines its own cursor
    #[serde(default)]
    pub source_defined_cursor: bool,
}

impl StreamReference {
    /// Reference a stream by name and namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            json_schema: JsonValue::Null,
            supported_sync_modes: Vec::new(),
            source_defined_cursor: false,
        }
    }
}

impl From<&CatalogStream> for StreamReference {
    fn from(stream: &CatalogStream) -> Self {
        Self {
            name: stream.name.clone(),
            namespace: stream.namespace.clone(),
            json_schema: serde_json::to_value(&stream.json_schema).unwrap_or_default(),
            supported_sync_modes: stream.supported_sync_modes.clone(),
            source_defined_cursor: stream.source_defined_cursor,
        }
    }
}

/// Configured catalog (selected streams for sync)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredCatalog {
    /// Selected streams
    pub streams: Vec<ConfiguredStream>,
}

/// Configured stream for sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredStream {
    /// Stream reference
    pub stream: StreamReference,

    /// Selected sync mode
    #[serde(default, alias = "syncMode")]
    pub sync_mode: SyncMode,

    /// Destination sync mode
    #[serde(default, alias = "destinationSyncMode")]
    pub destination_sync_mode: DestinationSyncMode,
}

impl ConfiguredStream {
    /// Configure a stream with the given sync mode
    pub fn new(stream: StreamReference, sync_mode: SyncMode) -> Self {
        Self {
            stream,
            sync_mode,
            destination_sync_mode: DestinationSyncMode::default(),
        }
    }

    /// Stream name
    pub fn name(&self) -> &str {
        &self.stream.name
    }

    /// Stream namespace
    pub fn namespace(&self) -> &str {
        &self.stream.namespace
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
