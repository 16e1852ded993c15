//! CLI commands and argument parsing

use crate::config::{SourceSettings, DEFAULT_BASE_URL};
use crate::types::FetchPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Random-data source connector
#[derive(Parser, Debug)]
#[command(name = "source-random-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the remote API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Connection timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    pub connect_timeout: u64,

    /// Fail a stream on undecodable responses or error statuses
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Runtime settings selected by the flags
    pub fn settings(&self) -> SourceSettings {
        let policy = if self.strict {
            FetchPolicy::Strict
        } else {
            FetchPolicy::Lenient
        };

        SourceSettings::new(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_connect_timeout(self.connect_timeout)
            .with_fetch_policy(policy)
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show connector specification
    Spec,

    /// Validate the configuration and test the connection
    Check {
        /// Configuration file (JSON)
        #[arg(long)]
        config: PathBuf,
    },

    /// Discover available streams
    Discover {
        /// Configuration file (JSON)
        #[arg(long)]
        config: PathBuf,
    },

    /// Read data from streams
    Read {
        /// Configuration file (JSON)
        #[arg(long)]
        config: PathBuf,

        /// Configured catalog file (JSON)
        #[arg(long)]
        catalog: PathBuf,

        /// State file (JSON)
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read() {
        let cli = Cli::try_parse_from([
            "source-random-data",
            "read",
            "--config",
            "config.json",
            "--catalog",
            "catalog.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Read {
                config,
                catalog,
                state,
            } => {
                assert_eq!(config, PathBuf::from("config.json"));
                assert_eq!(catalog, PathBuf::from("catalog.json"));
                assert!(state.is_none());
            }
            other => panic!("Expected Read command, got {other:?}"),
        }
    }

    #[test]
    fn test_default_settings() {
        let cli = Cli::try_parse_from(["source-random-data", "spec"]).unwrap();
        assert_eq!(cli.settings(), SourceSettings::default());
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "source-random-data",
            "check",
            "--config",
            "c.json",
            "--base-url",
            "http://localhost:1234",
            "--timeout",
            "5",
            "--strict",
        ])
        .unwrap();

        let settings = cli.settings();
        assert_eq!(settings.base_url, "http://localhost:1234");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.fetch_policy, FetchPolicy::Strict);
    }

    #[test]
    fn test_check_requires_config() {
        assert!(Cli::try_parse_from(["source-random-data", "check"]).is_err());
    }
}
