//! CLI module
//!
//! Command-line interface for running the connector.
//!
//! # Commands
//!
//! - `spec` - Print the connector specification
//! - `check` - Validate the configuration and probe the API
//! - `discover` - Print the catalog of available streams
//! - `read` - Extract records from the configured streams

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
