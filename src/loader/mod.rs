//! Document loader module
//!
//! Reads the host-supplied input documents and parses them into typed values.
//!
//! # Overview
//!
//! The loader module provides:
//! - `Document` - A readable JSON document, backed by a file or an inline string
//! - `load_configuration` - Parse the user configuration
//! - `load_state` - Parse the previous sync state
//! - `load_configured_catalog` - Parse the host-selected streams

mod parser;
mod types;

pub use parser::{load_configuration, load_configured_catalog, load_state};
pub use types::Document;

#[cfg(test)]
mod tests;
