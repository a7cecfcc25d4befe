//! Default contribution - tags every document gets unless overridden.
//!
//! The reconciler considers these after every real contribution, so any
//! contributor supplying its own charset or viewport meta replaces them.

use crate::config::HeadConfig;
use crate::types::Element;

/// Default head for a marker class and mode, using the built-in charset and viewport.
pub fn default_head(class_name: &str, restricted: bool) -> Vec<Element> {
    default_head_with(&HeadConfig::with_class_name(class_name), restricted)
}

/// Default head from a configuration.
///
/// Normal mode yields a charset meta followed by a viewport meta. Restricted
/// mode yields only the charset meta; viewport control is not part of the
/// restricted tag vocabulary.
pub fn default_head_with(config: &HeadConfig, restricted: bool) -> Vec<Element> {
    let mut head = vec![
        Element::meta()
            .attr("charset", config.charset.as_str())
            .attr("class", config.class_name.as_str())
            .key("charset"),
    ];
    if !restricted {
        head.push(
            Element::meta()
                .attr("name", "viewport")
                .attr("content", config.viewport.as_str())
                .attr("class", config.class_name.as_str())
                .key("viewport"),
        );
    }
    head
}
