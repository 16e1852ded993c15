//! Protocol message types
//!
//! Each message serializes to a single JSON object tagged by `type`.

use crate::config::Catalog;
use crate::connector::ConnectorSpec;
use crate::types::{JsonValue, LogLevel};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A message delivered to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// A single record
    Record { record: RecordMessage },

    /// State checkpoint
    State { state: StateMessage },

    /// Log line
    Log { log: LogMessage },

    /// Connector specification
    Spec { spec: ConnectorSpec },

    /// Discovered catalog
    Catalog { catalog: Catalog },

    /// Result of a connection check
    ConnectionStatus {
        #[serde(rename = "connectionStatus")]
        connection_status: ConnectionStatus,
    },
}

/// Record payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMessage {
    /// Stream name
    pub stream: String,
    /// Stream namespace
    pub namespace: String,
    /// Record data
    pub data: JsonValue,
    /// Emission time in unix milliseconds
    pub emitted_at: i64,
}

/// State payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMessage {
    /// Opaque state data
    pub data: JsonValue,
}

/// Log payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Log level
    pub level: LogLevel,
    /// Log text
    pub message: String,
}

/// Connection check outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Succeeded,
    Failed,
}

/// Connection status payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Outcome
    pub status: Status,
    /// Failure description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Message {
    /// Create a record message stamped with the current time
    pub fn record(stream: impl Into<String>, namespace: impl Into<String>, data: JsonValue) -> Self {
        Self::Record {
            record: RecordMessage {
                stream: stream.into(),
                namespace: namespace.into(),
                data,
                emitted_at: Utc::now().timestamp_millis(),
            },
        }
    }

    /// Create a state message
    pub fn state(data: JsonValue) -> Self {
        Self::State {
            state: StateMessage { data },
        }
    }

    /// Create a log message
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            log: LogMessage {
                level,
                message: message.into(),
            },
        }
    }

    /// Create an info log message
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log message
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log message
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }

    /// Create a spec message
    pub fn spec(spec: ConnectorSpec) -> Self {
        Self::Spec { spec }
    }

    /// Create a catalog message
    pub fn catalog(catalog: Catalog) -> Self {
        Self::Catalog { catalog }
    }

    /// Create a successful connection status message
    pub fn connection_succeeded() -> Self {
        Self::ConnectionStatus {
            connection_status: ConnectionStatus {
                status: Status::Succeeded,
                message: None,
            },
        }
    }

    /// Create a failed connection status message
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionStatus {
            connection_status: ConnectionStatus {
                status: Status::Failed,
                message: Some(message.into()),
            },
        }
    }

    /// Check if this is a record message
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record { .. })
    }

    /// Check if this is a state message
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State { .. })
    }
}
