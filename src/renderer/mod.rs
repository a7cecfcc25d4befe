//! Head renderer - Serialize a merged head to HTML.
//!
//! The consumer that owns the real head region decides where the markup
//! goes; this module only produces it.

mod html;

pub use html::{escape_attr, escape_text, render_element, render_head};
