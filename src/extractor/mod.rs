//! Link extraction over parsed HTML trees.
//!
//! The core is [`extract_links`], a stateless pre-order walk over an rcdom
//! tree that emits one [`Link`] per anchor element, in document order. An
//! anchor's descendant text is fully expanded but its subtree is never
//! searched for further anchors; nested anchors are invalid HTML and are
//! intentionally not reported.
//!
//! [`LinkParser`] wraps the same walk behind a feed-then-extract interface
//! for callers that want to pick a source (node, reader, or file) up front.

mod dom_walker;
mod text_util;

use std::io::Read;
use std::path::Path;

use markup5ever_rcdom::Handle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document_loader;
use crate::errors::{ExtractError, ExtractResult};

/// One hyperlink found in a document: destination plus visible text.
///
/// `href` is the anchor's destination attribute value, empty if absent.
/// `text` is the concatenation of all descendant text: trimmed at text
/// leaves, space-joined at every container level below the anchor. Links
/// carry no identity beyond their position in the extraction output, which
/// is the document pre-order of their anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Extract every link reachable from `root`, in document order.
///
/// Pure and non-mutating: the same tree always yields the same sequence,
/// and a document with no anchors yields an empty one.
pub fn extract_links(root: &Handle) -> Vec<Link> {
    let mut links = Vec::new();
    dom_walker::collect_links(root, &mut links);
    debug!(count = links.len(), "extracted links");
    links
}

/// Stateful wrapper over [`extract_links`] holding one document at a time.
///
/// Each `use_*` call replaces the previously stored root. `Handle` is
/// `Rc`-based, so a parser instance belongs to a single thread; give each
/// logical extraction its own instance.
#[derive(Debug, Default)]
pub struct LinkParser {
    root: Option<Handle>,
}

impl LinkParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-parsed node as the document root.
    pub fn use_node(&mut self, node: Handle) {
        self.root = Some(node);
    }

    /// Parse a byte stream and use the result as the document root.
    pub fn use_reader<R: Read>(&mut self, reader: &mut R) -> ExtractResult<()> {
        self.root = Some(document_loader::parse_reader(reader)?);
        Ok(())
    }

    /// Open and parse an HTML file and use the result as the document root.
    pub fn use_html_file<P: AsRef<Path>>(&mut self, path: P) -> ExtractResult<()> {
        self.root = Some(document_loader::parse_file(path)?);
        Ok(())
    }

    /// Extract all links from the current document.
    ///
    /// Fails with [`ExtractError::NoDocument`] if no source was set.
    pub fn extract(&self) -> ExtractResult<Vec<Link>> {
        let root = self.root.as_ref().ok_or(ExtractError::NoDocument)?;
        Ok(extract_links(root))
    }

    /// Extract all links and encode them as a JSON array.
    pub fn to_json(&self) -> ExtractResult<Vec<u8>> {
        let links = self.extract()?;
        crate::json_output::links_to_json(&links)
    }
}
