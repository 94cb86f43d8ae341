//! Extract hyperlink destinations and visible text from HTML documents.
//!
//! Input markup is parsed by html5ever into an rcdom tree; the extractor
//! walks that tree depth-first and reports each anchor element as a
//! [`Link`] record, serializable to JSON.
//!
//! ```
//! use linkharvest::{extract_links, parse_str};
//!
//! let root = parse_str(r#"<a href="/docs">Documentation</a>"#);
//! let links = extract_links(&root);
//! assert_eq!(links[0].href, "/docs");
//! assert_eq!(links[0].text, "Documentation");
//! ```

pub mod document_loader;
pub mod errors;
pub mod extractor;
pub mod json_output;

pub use document_loader::{parse_file, parse_reader, parse_str};
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{Link, LinkParser, extract_links};
pub use json_output::links_to_json;
