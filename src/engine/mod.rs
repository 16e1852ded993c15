//! Execution engine module
//!
//! The extraction loop behind `read`.
//!
//! # Overview
//!
//! Streams are processed one after another in the order the host listed
//! them. Each full-refresh stream is dispatched to the fetch routine of its
//! `StreamKind` and every decoded row is emitted as a record. A failing
//! stream does not stop the loop; the first failure is returned once every
//! stream has been attempted. Records already emitted are never retracted.

mod types;

pub use types::SyncStats;

use crate::config::{Configuration, ConfiguredCatalog, ConfiguredStream};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::output::Emitter;
use crate::streams::{FetchOutcome, StreamKind};
use crate::types::{FetchPolicy, LogLevel, SyncMode};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Sync engine for orchestrating data extraction
pub struct SyncEngine<'a> {
    /// HTTP client
    client: &'a HttpClient,
    /// Fetch policy
    policy: FetchPolicy,
    /// Statistics
    stats: SyncStats,
}

impl<'a> SyncEngine<'a> {
    /// Create a new sync engine
    pub fn new(client: &'a HttpClient, policy: FetchPolicy) -> Self {
        Self {
            client,
            policy,
            stats: SyncStats::default(),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Sync every stream of the configured catalog
    pub async fn run(
        &mut self,
        config: &Configuration,
        catalog: &ConfiguredCatalog,
        emitter: &mut dyn Emitter,
    ) -> Result<SyncStats> {
        let start = Instant::now();
        let mut first_error: Option<Error> = None;

        for stream in &catalog.streams {
            if stream.sync_mode != SyncMode::FullRefresh {
                debug!(
                    "Skipping stream {} with unsupported sync mode {:?}",
                    stream.name(),
                    stream.sync_mode
                );
                self.stats.add_skipped();
                continue;
            }

            let Some(kind) = StreamKind::from_name(stream.name()) else {
                warn!("Skipping unknown stream {}", stream.name());
                emitter.log(
                    LogLevel::Warn,
                    &format!("Skipping unknown stream: {}", stream.name()),
                )?;
                self.stats.add_skipped();
                continue;
            };

            emitter.log(
                LogLevel::Info,
                &format!("Starting sync for stream: {}", stream.name()),
            )?;

            match kind
                .fetch(self.client, config.num_elements, self.policy)
                .await
            {
                Ok(outcome) => self.emit_records(stream, outcome, emitter)?,
                Err(e) => {
                    self.stats.add_error();
                    emitter.log(
                        LogLevel::Error,
                        &format!("Sync failed for stream {}: {e}", stream.name()),
                    )?;
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        self.stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Read finished: {} records from {} streams, {} skipped, {} failed",
            self.stats.records_synced,
            self.stats.streams_synced,
            self.stats.streams_skipped,
            self.stats.errors
        );

        match first_error {
            Some(e) => Err(e),
            None => Ok(self.stats.clone()),
        }
    }

    /// Emit the fetched records of one stream
    fn emit_records(
        &mut self,
        stream: &ConfiguredStream,
        outcome: FetchOutcome,
        emitter: &mut dyn Emitter,
    ) -> Result<()> {
        if let Some(reason) = &outcome.decode_error {
            emitter.log(
                LogLevel::Warn,
                &format!("Discarded undecodable response for {}: {reason}", stream.name()),
            )?;
        }

        let count = outcome.records.len();
        for record in outcome.records {
            emitter.record(record, stream.name(), stream.namespace())?;
        }

        self.stats.add_records(count);
        self.stats.add_stream();

        emitter.log(
            LogLevel::Info,
            &format!("Completed sync for {}: {count} records", stream.name()),
        )
    }
}
