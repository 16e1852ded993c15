//! Stream module
//!
//! The streams offered by the source and the routines that fetch them.
//!
//! # Overview
//!
//! - `StreamKind` - Maps a stream name to its entity type and fetch routine
//! - `PhoneNumber`, `Code` - The record shapes returned by the remote API
//! - `catalog()` - The process-wide catalog, built once from `StreamKind::ALL`

mod fetch;
mod types;

pub use types::{Code, Entity, FetchOutcome, PhoneNumber};

use crate::config::{Catalog, CatalogStream};
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{FetchPolicy, SyncMode};
use std::fmt;
use std::sync::LazyLock;

/// Namespace every stream is declared in
pub const NAMESPACE: &str = "raw";

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let streams: Vec<CatalogStream> = StreamKind::ALL.iter().map(StreamKind::descriptor).collect();
    for (i, stream) in streams.iter().enumerate() {
        assert!(
            streams[..i].iter().all(|s| s.name != stream.name),
            "duplicate stream name in catalog: {}",
            stream.name
        );
    }
    Catalog { streams }
});

/// The static catalog of streams
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Entity kind served by the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    PhoneNumber,
    Code,
}

impl StreamKind {
    /// Every stream kind, in catalog order
    pub const ALL: [StreamKind; 2] = [StreamKind::PhoneNumber, StreamKind::Code];

    /// Look up the stream kind for a stream name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Stream name
    pub fn name(&self) -> &'static str {
        match self {
            Self::PhoneNumber => PhoneNumber::STREAM_NAME,
            Self::Code => Code::STREAM_NAME,
        }
    }

    /// Endpoint path relative to the base URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::PhoneNumber => PhoneNumber::ENDPOINT,
            Self::Code => Code::ENDPOINT,
        }
    }

    /// Catalog entry for this stream
    pub fn descriptor(&self) -> CatalogStream {
        let json_schema = match self {
            Self::PhoneNumber => PhoneNumber::schema(),
            Self::Code => Code::schema(),
        };

        CatalogStream {
            name: self.name().to_string(),
            namespace: NAMESPACE.to_string(),
            json_schema,
            supported_sync_modes: vec![SyncMode::FullRefresh],
            source_defined_cursor: false,
        }
    }

    /// Fetch one batch of records for this stream
    pub async fn fetch(
        &self,
        client: &HttpClient,
        num_elements: i64,
        policy: FetchPolicy,
    ) -> Result<FetchOutcome> {
        match self {
            Self::PhoneNumber => {
                fetch::fetch_entities::<PhoneNumber>(client, num_elements, policy).await
            }
            Self::Code => fetch::fetch_entities::<Code>(client, num_elements, policy).await,
        }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
