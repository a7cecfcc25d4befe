//! Flatten - Turn nested contributions into a flat element list.
//!
//! Fragments are spliced into their parent list in order. Text and number
//! leaves carry no head semantics and are dropped. Every element that comes
//! out is re-keyed relative to its own sibling list:
//!
//! ```text
//! caller key "og"       →  ".$og"   (reserved, dedups by key)
//! no key, position 2    →  ".2"     (not reserved)
//! ```

use crate::types::{Element, Node};

/// Prefix of keys derived from a caller-supplied key.
pub const AUTO_KEY_PREFIX: &str = ".$";

/// Check whether a key was derived from a caller-supplied key during flattening.
pub fn is_auto_key(key: &str) -> bool {
    key.starts_with(AUTO_KEY_PREFIX)
}

/// Key assigned to a child at `position` within its sibling list.
pub fn auto_key(caller_key: Option<&str>, position: usize) -> String {
    match caller_key {
        Some(key) => format!("{AUTO_KEY_PREFIX}{key}"),
        None => format!(".{position}"),
    }
}

/// Flatten one node list into elements.
pub fn flatten(nodes: &[Node]) -> Vec<Element> {
    let mut out = Vec::with_capacity(nodes.len());
    flatten_into(nodes, &mut out);
    out
}

/// Flatten several node lists, in order, into one element list.
pub fn flatten_all<'a>(lists: impl IntoIterator<Item = &'a [Node]>) -> Vec<Element> {
    let mut out = Vec::new();
    for nodes in lists {
        flatten_into(nodes, &mut out);
    }
    out
}

fn flatten_into(nodes: &[Node], out: &mut Vec<Element>) {
    for (position, node) in nodes.iter().enumerate() {
        match node {
            Node::Element(el) => out.push(el.with_key(auto_key(el.get_key(), position))),
            Node::Fragment(children) => flatten_into(children, out),
            Node::Text(_) | Node::Number(_) => {}
        }
    }
}
