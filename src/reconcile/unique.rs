//! Unique filter - Decide which elements survive deduplication.
//!
//! Elements are fed in precedence order (highest first). The first element to
//! claim an identity wins; later claimants are dropped.
//!
//! # Identity rules
//!
//! - Reserved auto-key: identity is the key alone.
//! - `title`, `base`: one per document.
//! - `meta charset`: one per document.
//! - `meta name` / `http-equiv` / `itemprop`: one per (attribute, value).
//! - Everything else has no identity and always survives.

use std::collections::{HashMap, HashSet};

use super::flatten::is_auto_key;
use crate::types::{Element, MetaCategory};

/// Single-use dedup state. Create a fresh one for every reconciliation.
#[derive(Debug, Default)]
pub struct UniqueFilter {
    /// Reserved keys and singleton tag names already claimed.
    seen: HashSet<String>,
    /// Meta categories unique per document (only charset).
    meta_types: MetaCategory,
    /// Values claimed per meta category.
    meta_values: HashMap<MetaCategory, HashSet<String>>,
}

impl UniqueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the element's identities and report whether it survives.
    pub fn admit(&mut self, el: &Element) -> bool {
        if let Some(key) = el.get_key().filter(|key| is_auto_key(key)) {
            return self.seen.insert(key.to_string());
        }

        match el.tag() {
            "title" | "base" => self.seen.insert(el.tag().to_string()),
            "meta" => self.admit_meta(el),
            _ => true,
        }
    }

    fn admit_meta(&mut self, el: &Element) -> bool {
        for category in el.meta_categories().iter() {
            if category == MetaCategory::CHARSET {
                if self.meta_types.contains(category) {
                    return false;
                }
                self.meta_types.insert(category);
            } else {
                let value = el.get_attr(category.attr_name()).unwrap_or_default();
                if !self
                    .meta_values
                    .entry(category)
                    .or_default()
                    .insert(value.to_string())
                {
                    return false;
                }
            }
        }
        true
    }
}
