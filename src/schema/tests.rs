//! Tests for schema types

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_nullable_field() {
    let field = FieldSchema::string();
    assert_eq!(field.types, vec![FieldType::String, FieldType::Null]);
    assert!(field.is_nullable());
    assert!(field.semantic_type.is_none());

    let null_only = FieldSchema::nullable(FieldType::Null);
    assert_eq!(null_only.types, vec![FieldType::Null]);
}

#[test]
fn test_big_integer_serialization() {
    let field = FieldSchema::big_integer();
    assert_eq!(
        serde_json::to_value(&field).unwrap(),
        json!({"type": ["integer", "null"], "airbyte_type": "big_integer"})
    );
}

#[test]
fn test_bigint_alias_accepted() {
    let field: FieldSchema =
        serde_json::from_value(json!({"type": ["integer"], "airbyte_type": "bigint"})).unwrap();
    assert_eq!(field.semantic_type, Some(SemanticType::BigInteger));
    assert!(!field.is_nullable());
}

#[test]
fn test_stream_schema_serialization_is_ordered() {
    let schema = StreamSchema::new()
        .with_field("uid", FieldSchema::string())
        .with_field("id", FieldSchema::big_integer());

    let json = serde_json::to_string(&schema).unwrap();
    assert_eq!(
        json,
        r#"{"type":"object","properties":{"id":{"type":["integer","null"],"airbyte_type":"big_integer"},"uid":{"type":["string","null"]}}}"#
    );
    assert!(schema.field("id").is_some());
    assert!(schema.field("missing").is_none());
}
