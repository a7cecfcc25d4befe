//! HTML serialization of head elements.
//!
//! # Rules
//!
//! - Void tags (`meta`, `link`, `base`) have no closing tag.
//! - Attribute values and text are escaped.
//! - `script` and `style` bodies are raw text and emitted as-is.
//! - Keys are identity only and never rendered.
//! - Nested elements inside content are rendered recursively, fragments are
//!   spliced.

use crate::types::{Element, Node};

const VOID_TAGS: &[&str] = &["base", "link", "meta"];
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

/// Render a whole merged head, one element per line.
pub fn render_head(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, el) in elements.iter().enumerate() {
        if i != 0 {
            out.push('\n');
        }
        write_element(&mut out, el);
    }
    out
}

/// Render one element.
pub fn render_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag()) {
        return;
    }

    let raw = RAW_TEXT_TAGS.contains(&el.tag());
    write_children(out, el.children(), raw);

    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

fn write_children(out: &mut String, children: &[Node], raw: bool) {
    for child in children {
        match child {
            Node::Text(text) if raw => out.push_str(text),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Number(n) => out.push_str(&n.to_string()),
            Node::Element(el) => write_element(out, el),
            Node::Fragment(nodes) => write_children(out, nodes, raw),
        }
    }
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
