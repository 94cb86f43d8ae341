//! Error types for link extraction
//!
//! Every failure surfaces synchronously as an `ExtractError`; nothing is
//! retried or recovered internally. The caller decides what to do.

use thiserror::Error;

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Error types for extraction operations
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File open/read failed before the parser ever saw the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The parser could not consume the input stream
    #[error("failed to parse HTML input: {0}")]
    Parse(#[source] std::io::Error),

    /// Extraction attempted before any document was set
    #[error("no document set: call use_node, use_reader, or use_html_file first")]
    NoDocument,

    /// JSON encoding of the extracted links failed
    #[error("failed to encode links: {0}")]
    Encode(#[from] serde_json::Error),
}
