//! Connector trait and the random-data HTTP source
//!
//! Defines the four-operation lifecycle every connector implements and the
//! `HttpSource` that serves the random-data API through it. Each call is
//! independent: nothing is carried from one invocation to the next.

use crate::config::{
    Catalog, ConfiguredCatalog, PropertyConfig, SourceSettings, SpecConfig, MAX_ELEMENTS,
    MIN_ELEMENTS,
};
use crate::engine::{SyncEngine, SyncStats};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::loader::{load_configuration, load_state, Document};
use crate::output::Emitter;
use crate::state::SyncState;
use crate::streams;
use crate::types::{DestinationSyncMode, PropertyType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

// ============================================================================
// Connector Spec (for UI)
// ============================================================================

/// Connector specification returned by spec()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSpec {
    /// Documentation URL
    #[serde(rename = "documentationUrl")]
    pub documentation_url: String,

    /// JSON schema of the configuration document
    #[serde(rename = "connectionSpecification")]
    pub connection_specification: Value,

    /// Whether incremental sync is supported
    #[serde(rename = "supportsIncremental")]
    pub supports_incremental: bool,

    /// Destination sync modes the records are suitable for
    pub supported_destination_sync_modes: Vec<DestinationSyncMode>,
}

// ============================================================================
// Connector Trait
// ============================================================================

/// Core trait that all connectors implement
#[async_trait]
pub trait Connector: Send + Sync {
    /// Returns the connector specification (for UI/validation)
    fn spec(&self) -> ConnectorSpec;

    /// Validates configuration and probes the remote source
    async fn check(&self, config: &Document) -> Result<()>;

    /// Lists available streams from the source
    async fn discover(&self, config: &Document) -> Result<Catalog>;

    /// Reads the selected streams, emitting records as they are decoded
    async fn read(
        &self,
        config: &Document,
        state: Option<&Document>,
        catalog: &ConfiguredCatalog,
        emitter: &mut dyn Emitter,
    ) -> Result<SyncStats>;
}

// ============================================================================
// HTTP Source
// ============================================================================

/// Source for the random-data HTTP API
#[derive(Debug)]
pub struct HttpSource {
    settings: SourceSettings,
    client: HttpClient,
}

impl HttpSource {
    /// Create a source from its runtime settings
    pub fn new(settings: SourceSettings) -> Result<Self> {
        let client = HttpClient::new(&settings.base_url, HttpClientConfig::from(&settings))?;
        Ok(Self { settings, client })
    }

    /// Runtime settings
    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    fn spec_config() -> SpecConfig {
        let mut spec = SpecConfig {
            title: Some("Random Data Source Spec".to_string()),
            ..SpecConfig::default()
        };
        spec.properties.insert(
            "numElements".to_string(),
            PropertyConfig {
                property_type: PropertyType::Integer,
                title: Some("Number of elements".to_string()),
                description: Some("Number of records requested per stream".to_string()),
                required: true,
                minimum: Some(MIN_ELEMENTS),
                maximum: Some(MAX_ELEMENTS),
                examples: vec![json!(10)],
            },
        );
        spec
    }
}

#[async_trait]
impl Connector for HttpSource {
    fn spec(&self) -> ConnectorSpec {
        ConnectorSpec {
            documentation_url: "https://random-data-api.com/documentation".to_string(),
            connection_specification: Self::spec_config().to_json_schema(),
            supports_incremental: false,
            supported_destination_sync_modes: vec![
                DestinationSyncMode::Overwrite,
                DestinationSyncMode::Append,
            ],
        }
    }

    async fn check(&self, config: &Document) -> Result<()> {
        let config = load_configuration(config)?;
        config.validate()?;

        info!("Checking connection to {}", self.client.base_url());
        let response = self
            .client
            .get_root()
            .await
            .map_err(|e| Error::connectivity(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::connectivity(format!(
                "{} returned HTTP {status}",
                self.client.base_url()
            )));
        }

        debug!("Connection check succeeded with HTTP {status}");
        Ok(())
    }

    async fn discover(&self, _config: &Document) -> Result<Catalog> {
        Ok(streams::catalog().clone())
    }

    async fn read(
        &self,
        config: &Document,
        state: Option<&Document>,
        catalog: &ConfiguredCatalog,
        emitter: &mut dyn Emitter,
    ) -> Result<SyncStats> {
        let config = load_configuration(config)?;
        let state = match state {
            Some(document) => load_state(document)?,
            None => SyncState::default(),
        };
        debug!("Previous sync time: {:?}", state.last_sync_at());

        let mut engine = SyncEngine::new(&self.client, self.settings.fetch_policy);
        engine.run(&config, catalog, emitter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemoryEmitter;
    use crate::types::SyncMode;

    fn source() -> HttpSource {
        HttpSource::new(SourceSettings::new("http://127.0.0.1:9")).unwrap()
    }

    #[test]
    fn test_spec() {
        let spec = source().spec();
        assert!(!spec.supports_incremental);

        let schema = &spec.connection_specification;
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["numElements"]));
        assert_eq!(schema["properties"]["numElements"]["type"], "integer");
        assert_eq!(schema["properties"]["numElements"]["minimum"], 1);
        assert_eq!(schema["properties"]["numElements"]["maximum"], 100);
    }

    #[test]
    fn test_spec_serialization() {
        let value = serde_json::to_value(source().spec()).unwrap();
        assert!(value.get("connectionSpecification").is_some());
        assert_eq!(
            value["supported_destination_sync_modes"],
            json!(["overwrite", "append"])
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpSource::new(SourceSettings::new("::not a url::")),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_discover_ignores_config_content() {
        let source = source();
        let from_valid = source
            .discover(&Document::inline(r#"{"numElements": 5}"#))
            .await
            .unwrap();
        let from_garbage = source.discover(&Document::inline("garbage")).await.unwrap();

        assert_eq!(from_valid, from_garbage);
        assert_eq!(from_valid.streams.len(), 2);
    }

    #[tokio::test]
    async fn test_check_rejects_range_before_probing() {
        // Port 9 is not served; the range check has to fail first
        let result = source()
            .check(&Document::inline(r#"{"numElements": 0}"#))
            .await;
        assert!(matches!(result, Err(Error::ConfigRange { .. })));
    }

    #[tokio::test]
    async fn test_read_propagates_state_parse_error() {
        let mut emitter = MemoryEmitter::new();
        let catalog = streams::catalog().to_configured(SyncMode::FullRefresh);

        let result = source()
            .read(
                &Document::inline(r#"{"numElements": 5}"#),
                Some(&Document::inline("{}")),
                &catalog,
                &mut emitter,
            )
            .await;

        assert!(matches!(result, Err(Error::StateParse { .. })));
        assert!(emitter.messages().is_empty());
    }
}
