//! Tests for the document loader

use super::*;
use crate::error::Error;
use crate::types::SyncMode;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_document(content: &str) -> (NamedTempFile, Document) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    let document = Document::from_path(file.path());
    (file, document)
}

// ============================================================================
// Document Tests
// ============================================================================

#[test]
fn test_inline_document_read() {
    let doc = Document::inline(r#"{"numElements": 3}"#);
    assert_eq!(doc.read().unwrap(), r#"{"numElements": 3}"#);
    assert_eq!(doc.to_string(), "<inline>");
}

#[test]
fn test_path_document_read() {
    let (_file, doc) = temp_document("{}");
    assert_eq!(doc.read().unwrap(), "{}");
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_load_configuration_from_file() {
    let (_file, doc) = temp_document(r#"{"numElements": 42}"#);
    let config = load_configuration(&doc).unwrap();
    assert_eq!(config.num_elements, 42);
}

#[test]
fn test_load_configuration_ignores_unknown_fields() {
    let doc = Document::inline(r#"{"numElements": 5, "extra": true}"#);
    assert_eq!(load_configuration(&doc).unwrap().num_elements, 5);
}

#[test]
fn test_load_configuration_does_not_check_range() {
    let doc = Document::inline(r#"{"numElements": 0}"#);
    assert_eq!(load_configuration(&doc).unwrap().num_elements, 0);
}

#[test]
fn test_load_configuration_missing_field() {
    let doc = Document::inline("{}");
    let err = load_configuration(&doc).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("numElements"));
}

#[test]
fn test_load_configuration_wrong_type() {
    let doc = Document::inline(r#"{"numElements": "ten"}"#);
    assert!(matches!(
        load_configuration(&doc),
        Err(Error::ConfigParse { .. })
    ));
}

#[test]
fn test_load_configuration_malformed() {
    let doc = Document::inline("{not json");
    assert!(matches!(
        load_configuration(&doc),
        Err(Error::ConfigParse { .. })
    ));
}

#[test]
fn test_load_configuration_missing_file() {
    let doc = Document::from_path("/nonexistent/config.json");
    let err = load_configuration(&doc).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("/nonexistent/config.json"));
}

// ============================================================================
// State Tests
// ============================================================================

#[test]
fn test_load_state() {
    let (_file, doc) = temp_document(r#"{"lastSyncTime": 1700000000}"#);
    assert_eq!(load_state(&doc).unwrap().last_sync_time, 1_700_000_000);
}

#[test]
fn test_load_state_missing_field() {
    let doc = Document::inline(r#"{"cursor": "abc"}"#);
    assert!(matches!(load_state(&doc), Err(Error::StateParse { .. })));
}

#[test]
fn test_load_state_wrong_type() {
    let doc = Document::inline(r#"{"lastSyncTime": "yesterday"}"#);
    assert!(matches!(load_state(&doc), Err(Error::StateParse { .. })));
}

// ============================================================================
// Configured Catalog Tests
// ============================================================================

#[test]
fn test_load_configured_catalog() {
    let doc = Document::inline(
        r#"{
            "streams": [
                {"stream": {"name": "PhoneNumber", "namespace": "raw"}, "sync_mode": "full_refresh"},
                {"stream": {"name": "Code", "namespace": "raw"}, "syncMode": "incremental"}
            ]
        }"#,
    );

    let catalog = load_configured_catalog(&doc).unwrap();
    assert_eq!(catalog.streams.len(), 2);
    assert_eq!(catalog.streams[0].name(), "PhoneNumber");
    assert_eq!(catalog.streams[0].sync_mode, SyncMode::FullRefresh);
    assert_eq!(catalog.streams[1].namespace(), "raw");
    assert_eq!(catalog.streams[1].sync_mode, SyncMode::Incremental);
}

#[test]
fn test_load_configured_catalog_with_host_schema() {
    let doc = Document::inline(
        r#"{
            "streams": [{
                "stream": {
                    "name": "Code",
                    "namespace": "raw",
                    "json_schema": {
                        "type": "object",
                        "properties": {
                            "id": {"type": "integer"},
                            "score": {"type": ["number", "null"]}
                        }
                    },
                    "supported_sync_modes": ["full_refresh"]
                },
                "sync_mode": "full_refresh",
                "destination_sync_mode": "overwrite"
            }]
        }"#,
    );

    let catalog = load_configured_catalog(&doc).unwrap();
    assert_eq!(catalog.streams[0].name(), "Code");
    assert_eq!(
        catalog.streams[0].stream.json_schema["properties"]["id"]["type"],
        "integer"
    );
}

#[test]
fn test_load_configured_catalog_unknown_sync_mode() {
    let doc = Document::inline(
        r#"{"streams": [{"stream": {"name": "Code"}, "sync_mode": "cdc"}]}"#,
    );
    assert!(matches!(
        load_configured_catalog(&doc),
        Err(Error::CatalogParse { .. })
    ));
}

#[test]
fn test_load_configured_catalog_missing_streams() {
    let doc = Document::inline("{}");
    assert!(matches!(
        load_configured_catalog(&doc),
        Err(Error::CatalogParse { .. })
    ));
}
