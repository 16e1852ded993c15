//! JSON parsers for the input documents
//!
//! Every failure, whether the document cannot be read or does not match the
//! expected shape, maps to the parse error of that document kind.

use crate::config::{Configuration, ConfiguredCatalog};
use crate::error::{Error, Result};
use crate::loader::types::Document;
use crate::state::SyncState;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Load the user configuration
pub fn load_configuration(document: &Document) -> Result<Configuration> {
    let config: Configuration = parse(document).map_err(Error::config_parse)?;
    debug!("Loaded configuration from {document}: {config:?}");
    Ok(config)
}

/// Load the previous sync state
pub fn load_state(document: &Document) -> Result<SyncState> {
    let state: SyncState = parse(document).map_err(Error::state_parse)?;
    debug!("Loaded state from {document}: {state:?}");
    Ok(state)
}

/// Load the configured catalog
pub fn load_configured_catalog(document: &Document) -> Result<ConfiguredCatalog> {
    let catalog: ConfiguredCatalog = parse(document).map_err(Error::catalog_parse)?;
    debug!(
        "Loaded configured catalog from {document}: {} streams",
        catalog.streams.len()
    );
    Ok(catalog)
}

fn parse<T: DeserializeOwned>(document: &Document) -> std::result::Result<T, String> {
    let content = document
        .read()
        .map_err(|e| format!("Failed to read '{document}': {e}"))?;
    serde_json::from_str(&content).map_err(|e| format!("Invalid JSON in '{document}': {e}"))
}
