//! Stream schema module
//!
//! Statically declared field schemas for the catalog streams.
//!
//! # Overview
//!
//! - `FieldType` - JSON type a field value may take
//! - `SemanticType` - finer-grained meaning layered on top of the JSON type
//! - `FieldSchema` - the declared shape of one field
//! - `StreamSchema` - the object schema of one stream

mod types;

pub use types::{FieldSchema, FieldType, SemanticType, StreamSchema};

#[cfg(test)]
mod tests;
