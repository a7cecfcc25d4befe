//! Primitive types - Props and cleanup.
//!
//! These types define the interface for head primitive props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;
use spark_signals::Signal;

use crate::types::{Contribution, Element, Node};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by primitives.
///
/// Call this to unmount the primitive and release its registration.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading a signal or getter inside an effect establishes a dependency, so
/// the primitive re-runs when the source changes.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<Vec<Element>> for PropValue<Contribution> {
    fn from(elements: Vec<Element>) -> Self {
        PropValue::Static(elements.into_iter().map(Node::Element).collect())
    }
}

// =============================================================================
// Head Props
// =============================================================================

/// Properties for the head primitive.
///
/// # Example
///
/// ```ignore
/// use spark_head::{head, Element, HeadProps, PropValue};
/// use spark_signals::signal;
///
/// let page_title = signal("Home".to_string());
/// let title_clone = page_title.clone();
///
/// let cleanup = head(HeadProps {
///     children: PropValue::Getter(Rc::new(move || {
///         vec![Element::title(title_clone.get()).into()]
///     })),
/// });
///
/// // Later: the merged head is recomputed and republished
/// page_title.set("About".to_string());
/// ```
#[derive(Clone, Default)]
pub struct HeadProps {
    /// Nodes this block contributes to the document head.
    pub children: PropValue<Contribution>,
}

impl HeadProps {
    /// Props with a static contribution.
    pub fn new(children: impl Into<PropValue<Contribution>>) -> Self {
        Self {
            children: children.into(),
        }
    }
}
