//! # Random-Data Source
//!
//! A full-refresh source connector that pulls phone numbers and codes from
//! the random-data HTTP API into a schema-tagged record stream.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use source_random_data::config::SourceSettings;
//! use source_random_data::connector::{Connector, HttpSource};
//! use source_random_data::loader::Document;
//! use source_random_data::output::WriterEmitter;
//! use source_random_data::SyncMode;
//!
//! #[tokio::main]
//! async fn main() -> source_random_data::Result<()> {
//!     let source = HttpSource::new(SourceSettings::default())?;
//!     let config = Document::inline(r#"{"numElements": 10}"#);
//!
//!     source.check(&config).await?;
//!
//!     let catalog = source.discover(&config).await?.to_configured(SyncMode::FullRefresh);
//!     let mut emitter = WriterEmitter::stdout(false);
//!     source.read(&config, None, &catalog, &mut emitter).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                     Connector Interface                       │
//! │  spec() → ConnectorSpec   check() → ()   discover() → Catalog │
//! │  read(config, state, catalog, emitter) → SyncStats            │
//! └───────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────────────┼───────────────┬────────────────┐
//! │  Loader  │     Engine       │    Streams    │     Output     │
//! ├──────────┼──────────────────┼───────────────┼────────────────┤
//! │ Config   │ Per-stream loop  │ PhoneNumber   │ RECORD / LOG   │
//! │ State    │ Mode dispatch    │ Code          │ SPEC / CATALOG │
//! │ Catalog  │ First-error      │ Static schema │ STATUS         │
//! └──────────┴──────────────────┴───────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Configuration, settings and catalog types
pub mod config;

/// Previous sync state
pub mod state;

/// Input document loading
pub mod loader;

/// Stream field schemas
pub mod schema;

/// Streams, entities and fetch routines
pub mod streams;

/// HTTP client with timeouts
pub mod http;

/// Protocol messages and emitters
pub mod output;

/// Extraction engine
pub mod engine;

/// Connector trait and HTTP source
pub mod connector;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use connector::{Connector, HttpSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
