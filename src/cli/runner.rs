//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::connector::{Connector, HttpSource};
use crate::error::Result;
use crate::loader::{load_configured_catalog, Document};
use crate::output::{Emitter, Message, WriterEmitter};
use crate::types::LogLevel;
use tracing::{error, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing messages to stdout
    pub async fn run(&self) -> Result<()> {
        let mut emitter = WriterEmitter::stdout(self.cli.format == OutputFormat::Pretty);
        self.run_with(&mut emitter).await
    }

    /// Run the CLI command against the given emitter
    pub async fn run_with(&self, emitter: &mut dyn Emitter) -> Result<()> {
        let source = HttpSource::new(self.cli.settings())?;

        match &self.cli.command {
            Commands::Spec => emitter.emit(Message::spec(source.spec())),
            Commands::Check { config } => {
                Self::check(&source, &Document::from_path(config), emitter).await
            }
            Commands::Discover { config } => {
                let catalog = source.discover(&Document::from_path(config)).await?;
                emitter.emit(Message::catalog(catalog))
            }
            Commands::Read {
                config,
                catalog,
                state,
            } => {
                let config = Document::from_path(config);
                let state = state.as_ref().map(Document::from_path);
                Self::read(&source, &config, state.as_ref(), &Document::from_path(catalog), emitter)
                    .await
            }
        }
    }

    /// Check connection, reporting the outcome as a status message
    async fn check(source: &HttpSource, config: &Document, emitter: &mut dyn Emitter) -> Result<()> {
        match source.check(config).await {
            Ok(()) => emitter.emit(Message::connection_succeeded()),
            Err(e) => {
                warn!("Connection check failed: {e}");
                emitter.emit(Message::connection_failed(e.to_string()))
            }
        }
    }

    /// Read the configured streams
    async fn read(
        source: &HttpSource,
        config: &Document,
        state: Option<&Document>,
        catalog: &Document,
        emitter: &mut dyn Emitter,
    ) -> Result<()> {
        let result = match load_configured_catalog(catalog) {
            Ok(catalog) => source.read(config, state, &catalog, emitter).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(stats) => {
                info!(
                    "Synced {} records from {} streams in {}ms",
                    stats.records_synced, stats.streams_synced, stats.duration_ms
                );
                Ok(())
            }
            Err(e) => {
                error!("Read failed: {e}");
                emitter.log(LogLevel::Error, &format!("Read failed: {e}"))?;
                Err(e)
            }
        }
    }
}
