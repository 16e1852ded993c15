//! Error types for the random-data source
//!
//! Every lifecycle operation returns `Result<T, Error>`. The variants mirror
//! the failure points of the lifecycle: input documents, configuration
//! bounds, the connectivity probe and the per-stream fetch.

use thiserror::Error;

/// The main error type for the connector
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Document Errors
    // ============================================================================
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    #[error("Failed to parse state: {message}")]
    StateParse { message: String },

    #[error("Failed to parse configured catalog: {message}")]
    CatalogParse { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    ConfigRange { field: String, message: String },

    // ============================================================================
    // Remote Source Errors
    // ============================================================================
    #[error("Connection check failed: {message}")]
    Connectivity { message: String },

    #[error("Failed to fetch stream '{stream}': {message}")]
    Fetch { stream: String, message: String },

    #[error("Failed to decode response for stream '{stream}': {message}")]
    Decode { stream: String, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create a state parse error
    pub fn state_parse(message: impl Into<String>) -> Self {
        Self::StateParse {
            message: message.into(),
        }
    }

    /// Create a configured catalog parse error
    pub fn catalog_parse(message: impl Into<String>) -> Self {
        Self::CatalogParse {
            message: message.into(),
        }
    }

    /// Create a configuration range error
    pub fn config_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigRange {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a connectivity error
    pub fn connectivity(message: impl Into<String>) -> Self {
        Self::Connectivity {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(stream: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            stream: stream.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(stream: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            stream: stream.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for the connector
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config_parse("missing field `numElements`");
        assert_eq!(
            err.to_string(),
            "Failed to parse configuration: missing field `numElements`"
        );

        let err = Error::config_range("numElements", "cannot exceed 100 elements");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'numElements': cannot exceed 100 elements"
        );

        let err = Error::fetch("PhoneNumber", "connection refused");
        assert_eq!(
            err.to_string(),
            "Failed to fetch stream 'PhoneNumber': connection refused"
        );
    }
}
