//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON type a field value may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    String,
    Null,
}

/// Semantic type refining a JSON type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// 64-bit integer (declared as `bigint`, rendered as `big_integer`)
    #[serde(alias = "bigint")]
    BigInteger,
}

/// Declared schema of a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Allowed JSON types
    #[serde(rename = "type")]
    pub types: Vec<FieldType>,

    /// Semantic type, if any
    #[serde(rename = "airbyte_type", default, skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<SemanticType>,
}

impl FieldSchema {
    /// A field that holds the given type or null
    pub fn nullable(field_type: FieldType) -> Self {
        let mut types = vec![field_type];
        if field_type != FieldType::Null {
            types.push(FieldType::Null);
        }
        Self {
            types,
            semantic_type: None,
        }
    }

    /// Nullable 64-bit integer
    pub fn big_integer() -> Self {
        Self::nullable(FieldType::Integer).with_semantic_type(SemanticType::BigInteger)
    }

    /// Nullable string
    pub fn string() -> Self {
        Self::nullable(FieldType::String)
    }

    /// Set semantic type
    #[must_use]
    pub fn with_semantic_type(mut self, semantic_type: SemanticType) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    /// Check if null is an allowed value
    pub fn is_nullable(&self) -> bool {
        self.types.contains(&FieldType::Null)
    }
}

/// Object schema describing the records of one stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSchema {
    /// Schema type (always "object")
    #[serde(rename = "type", default = "default_object")]
    pub schema_type: String,

    /// Field schemas keyed by field name
    #[serde(default)]
    pub properties: BTreeMap<String, FieldSchema>,
}

fn default_object() -> String {
    "object".to_string()
}

impl Default for StreamSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamSchema {
    /// Create an empty object schema
    pub fn new() -> Self {
        Self {
            schema_type: default_object(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn with_field(mut self, name: &str, field: FieldSchema) -> Self {
        self.properties.insert(name.to_string(), field);
        self
    }

    /// Get a field
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.properties.get(name)
    }
}
