//! JSON encoding of extracted links.

use tracing::debug;

use crate::errors::ExtractResult;
use crate::extractor::Link;

/// Encode `links` as a JSON array of `{"href", "text"}` objects, preserving
/// order. Encoding failures are propagated, never swallowed.
pub fn links_to_json(links: &[Link]) -> ExtractResult<Vec<u8>> {
    let bytes = serde_json::to_vec(links)?;
    debug!(count = links.len(), bytes = bytes.len(), "encoded links");
    Ok(bytes)
}
