//! Descendant text accumulation for anchor elements.

use markup5ever_rcdom::{Handle, NodeData};

/// Visible text of `node` and its subtree.
///
/// Text leaves are trimmed of leading/trailing whitespace with interior
/// whitespace kept verbatim. Container nodes join each child's text with a
/// single unconditional leading space and do not re-trim, so the result may
/// carry padding spaces; callers append it as-is. The asymmetry is what
/// keeps text fragments from adjacent inline elements separated by a space
/// instead of running together, matching the expected output corpus.
pub(crate) fn text_of(node: &Handle) -> String {
    match &node.data {
        NodeData::Text { contents } => contents.borrow().trim().to_string(),
        NodeData::Document | NodeData::Element { .. } => {
            let mut buffer = String::new();
            for child in node.children.borrow().iter() {
                buffer.push(' ');
                buffer.push_str(&text_of(child));
            }
            buffer
        }
        _ => String::new(),
    }
}
