//! Core types for spark-head.
//!
//! These types define the foundation that everything builds on.
//! Contributors hand [`Node`] lists to the registry, the reconciler flattens
//! them into [`Element`]s, and the renderer serializes the merged result.
//!
//! Elements are immutable values: every transformation produces a new
//! [`Element`] rather than mutating one that a contributor still holds.

// =============================================================================
// Node - Anything a contributor can put inside a head block
// =============================================================================

/// One child of a head contribution.
///
/// Only [`Node::Element`] carries head semantics. Fragments are transparent
/// groupings whose children are spliced into the surrounding list, and text or
/// number leaves are dropped when a contribution is flattened.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A head tag.
    Element(Element),
    /// A grouping construct.
    Fragment(Vec<Node>),
    /// A bare text leaf.
    Text(String),
    /// A bare number leaf.
    Number(f64),
}

impl Node {
    /// Wrap a list of nodes in a fragment.
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    /// Get the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Number(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Number(value as f64)
    }
}

/// Ordered list of nodes supplied by one contributor at one point in time.
///
/// Replaced wholesale on every render of its owner.
pub type Contribution = Vec<Node>;

// =============================================================================
// Attribute names
// =============================================================================

/// Map component-style attribute spellings onto their HTML names.
///
/// `className`, `charSet`, `httpEquiv` and `itemProp` are accepted so that
/// markup written for component frameworks dedups the same as plain HTML.
pub fn canonical_attr_name(name: &str) -> String {
    match name {
        "className" => "class".to_string(),
        "charSet" => "charset".to_string(),
        "httpEquiv" => "http-equiv".to_string(),
        "itemProp" => "itemprop".to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Element - A single head tag
// =============================================================================

/// A single head tag: name, attributes, optional identity key, content.
///
/// # Example
///
/// ```ignore
/// use spark_head::Element;
///
/// let description = Element::meta()
///     .attr("name", "description")
///     .attr("content", "A page about things");
///
/// let title = Element::title("Home");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    key: Option<String>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self {
            tag: tag.as_ref().to_ascii_lowercase(),
            attrs: Vec::new(),
            key: None,
            children: Vec::new(),
        }
    }

    /// Create a `<meta>` element.
    pub fn meta() -> Self {
        Self::new("meta")
    }

    /// Create a `<title>` element with text content.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new("title").child(Node::Text(text.into()))
    }

    /// Set an attribute, replacing any existing value with the same name.
    pub fn attr(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the caller-supplied identity key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append a content child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    fn set_attr(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = canonical_attr_name(name.as_ref());
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Lowercased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Check the tag name.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Look up an attribute (ASCII-case-insensitive, component spellings accepted).
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        let name = canonical_attr_name(name);
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
            .map(|(_, v)| v.as_str())
    }

    /// Check whether an attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// The element's identity key, if any.
    pub fn get_key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Content children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all direct text and number children.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Number(n) => out.push_str(&n.to_string()),
                _ => {}
            }
        }
        out
    }

    /// Meta identity categories this element carries.
    ///
    /// Always empty for anything other than `<meta>`.
    pub fn meta_categories(&self) -> MetaCategory {
        if !self.is("meta") {
            return MetaCategory::empty();
        }
        MetaCategory::all()
            .iter()
            .filter(|category| self.has_attr(category.attr_name()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Transformations (produce new elements)
    // -------------------------------------------------------------------------

    /// Copy of this element with a different key.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        let mut el = self.clone();
        el.key = Some(key.into());
        el
    }

    /// Copy of this element with `class_name` appended to its class list.
    ///
    /// Returns an unchanged copy if the class is already present.
    pub fn with_class(&self, class_name: &str) -> Self {
        let mut el = self.clone();
        let class = match self.get_attr("class") {
            Some(existing) if existing.split_whitespace().any(|c| c == class_name) => {
                return el;
            }
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class_name)
            }
            _ => class_name.to_string(),
        };
        el.set_attr("class", class);
        el
    }
}

// =============================================================================
// Meta categories (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Identity attributes that make a `<meta>` tag unique.
    ///
    /// Declaration order is the order the reconciler checks them in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MetaCategory: u8 {
        const NAME = 1 << 0;
        const HTTP_EQUIV = 1 << 1;
        const CHARSET = 1 << 2;
        const ITEMPROP = 1 << 3;
    }
}

impl MetaCategory {
    /// HTML attribute name for a single category.
    ///
    /// Combined flags have no attribute name and return an empty string.
    pub fn attr_name(self) -> &'static str {
        if self == Self::NAME {
            "name"
        } else if self == Self::HTTP_EQUIV {
            "http-equiv"
        } else if self == Self::CHARSET {
            "charset"
        } else if self == Self::ITEMPROP {
            "itemprop"
        } else {
            ""
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
