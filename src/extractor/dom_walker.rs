//! Recursive pre-order walk over the rcdom tree.

use markup5ever_rcdom::{Handle, NodeData};

use super::Link;
use super::text_util::text_of;

/// Collect links from `node` and its subtree into `links`, depth-first,
/// left to right. Anchors are emitted in document order.
pub(super) fn collect_links(node: &Handle, links: &mut Vec<Link>) {
    match &node.data {
        NodeData::Element { name, attrs, .. } if &*name.local == "a" => {
            // First attribute whose key is exactly `href` wins; absent
            // means an empty destination, not an error.
            let href = attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == "href")
                .map(|attr| attr.value.to_string())
                .unwrap_or_default();

            let mut text = String::new();
            for child in node.children.borrow().iter() {
                text.push_str(&text_of(child));
            }

            links.push(Link { href, text });
            // Nested anchors are invalid HTML; the subtree is treated as a
            // leaf for link discovery even though its text was expanded.
        }
        NodeData::Document | NodeData::Element { .. } => {
            for child in node.children.borrow().iter() {
                collect_links(child, links);
            }
        }
        _ => {}
    }
}
