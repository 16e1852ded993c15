//! Fetch routines
//!
//! One GET per stream, no pagination. `size` is advisory: whatever array
//! length the API returns is accepted.

use super::types::{Entity, FetchOutcome};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::FetchPolicy;
use tracing::{debug, warn};

pub(crate) async fn fetch_entities<T: Entity>(
    client: &HttpClient,
    num_elements: i64,
    policy: FetchPolicy,
) -> Result<FetchOutcome> {
    let url = client.endpoint_url(T::ENDPOINT, &[("size", num_elements.to_string())])?;

    let response = client
        .get(&url)
        .await
        .map_err(|e| Error::fetch(T::STREAM_NAME, e.to_string()))?;

    let status = response.status();
    if policy == FetchPolicy::Strict && !status.is_success() {
        return Err(Error::fetch(
            T::STREAM_NAME,
            format!("unexpected HTTP status {status}"),
        ));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::fetch(T::STREAM_NAME, format!("Failed to read response body: {e}")))?;

    let rows: Vec<T> = match serde_json::from_str(&body) {
        Ok(rows) => rows,
        Err(e) if policy == FetchPolicy::Lenient => {
            warn!("Discarding undecodable {} response: {e}", T::STREAM_NAME);
            return Ok(FetchOutcome {
                records: Vec::new(),
                decode_error: Some(e.to_string()),
            });
        }
        Err(e) => return Err(Error::decode(T::STREAM_NAME, e.to_string())),
    };

    debug!("Decoded {} {} rows", rows.len(), T::STREAM_NAME);

    let records = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(FetchOutcome {
        records,
        decode_error: None,
    })
}
