//! Source adapter over the HTML parser.
//!
//! Normalizes the three supported input forms (in-memory markup, a readable
//! byte stream, a file on disk) into one `markup5ever_rcdom` document
//! handle. Parsing itself is delegated entirely to html5ever; this module
//! only wires the streams up and maps failures onto [`ExtractError`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};
use tracing::debug;

use crate::errors::{ExtractError, ExtractResult};

/// Parse a full byte stream into a document root.
///
/// html5ever recovers from malformed markup, so the only failure mode here
/// is the stream itself refusing to be read; that is reported as
/// [`ExtractError::Parse`] with the underlying cause attached.
pub fn parse_reader<R: Read>(reader: &mut R) -> ExtractResult<Handle> {
    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .read_from(reader)
        .map_err(ExtractError::Parse)?;
    debug!(parse_errors = dom.errors.borrow().len(), "parsed HTML document");
    Ok(dom.document)
}

/// Open `path` and parse its contents into a document root.
///
/// The file handle is scoped to this call and closed on every exit path,
/// including parse failure. An open failure is [`ExtractError::Io`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> ExtractResult<Handle> {
    let mut file = File::open(path.as_ref())?;
    parse_reader(&mut file)
}

/// Parse in-memory markup into a document root. Cannot fail: html5ever
/// accepts arbitrary input and reading from a string cannot error.
pub fn parse_str(html: &str) -> Handle {
    parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .document
}
