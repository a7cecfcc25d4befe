//! Head context - What contributors read from and publish to.
//!
//! Two capabilities supplied by the host:
//! - a restricted-mode flag, read before every recompute
//! - an optional publish target receiving every merged result
//!
//! Either can be backed by spark-signals, so the consumer writing the real
//! head region can simply react to a `Signal<Vec<Element>>`.
//!
//! # Example
//!
//! ```ignore
//! use spark_head::{HeadContext, set_head_context};
//! use spark_signals::signal;
//!
//! let amp = signal(false);
//! let head = signal(Vec::new());
//! set_head_context(HeadContext::from_signals(amp.clone(), head.clone()));
//!
//! // ... contributors mount ...
//! for el in head.get() {
//!     println!("{}", spark_head::render_element(&el));
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::Signal;

use crate::types::Element;

/// Publish callback receiving each merged result.
pub type PublishFn = Rc<dyn Fn(&[Element])>;

// =============================================================================
// Execution
// =============================================================================

/// How the host evaluates contributors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// Mount, update and unmount hooks are delivered.
    #[default]
    Interactive,
    /// One evaluation pass with no lifecycle hooks (server rendering).
    SingleShot,
}

// =============================================================================
// HeadContext
// =============================================================================

/// Restricted-mode flag plus publish target.
#[derive(Clone)]
pub struct HeadContext {
    restricted: Rc<dyn Fn() -> bool>,
    publish: Option<PublishFn>,
}

impl Default for HeadContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadContext")
            .field("restricted", &self.is_restricted())
            .field("has_publish", &self.publish.is_some())
            .finish()
    }
}

impl HeadContext {
    /// Normal mode, nothing to publish to.
    pub fn new() -> Self {
        Self {
            restricted: Rc::new(|| false),
            publish: None,
        }
    }

    /// Fixed restricted-mode flag, nothing to publish to.
    pub fn restricted(restricted: bool) -> Self {
        Self::new().with_restricted_getter(move || restricted)
    }

    /// Read restricted mode from a getter (called before every recompute).
    pub fn with_restricted_getter(mut self, getter: impl Fn() -> bool + 'static) -> Self {
        self.restricted = Rc::new(getter);
        self
    }

    /// Publish merged results to a callback.
    pub fn with_publish(mut self, publish: impl Fn(&[Element]) + 'static) -> Self {
        self.publish = Some(Rc::new(publish));
        self
    }

    /// Read restricted mode from one signal and publish into another.
    pub fn from_signals(restricted: Signal<bool>, target: Signal<Vec<Element>>) -> Self {
        Self::new()
            .with_restricted_getter(move || restricted.get())
            .with_publish(move |head| {
                target.set(head.to_vec());
            })
    }

    /// Same mode source with the publish target removed.
    ///
    /// Used to recompute inside a state borrow and publish after releasing it.
    pub fn without_publish(&self) -> Self {
        Self {
            restricted: self.restricted.clone(),
            publish: None,
        }
    }

    /// Current restricted-mode flag.
    pub fn is_restricted(&self) -> bool {
        (self.restricted)()
    }

    /// Whether a publish target is available.
    pub fn can_publish(&self) -> bool {
        self.publish.is_some()
    }

    /// Hand a merged result to the publish target, if any.
    pub fn publish(&self, head: &[Element]) {
        if let Some(publish) = &self.publish {
            publish(head);
        }
    }
}

// =============================================================================
// Current context (thread-local)
// =============================================================================

thread_local! {
    static CURRENT_CONTEXT: RefCell<HeadContext> = RefCell::new(HeadContext::new());
    static EXECUTION: Cell<Execution> = const { Cell::new(Execution::Interactive) };
}

/// Install the context used by the [`head`](crate::primitives::head) primitive.
pub fn set_head_context(context: HeadContext) {
    CURRENT_CONTEXT.with(|current| *current.borrow_mut() = context);
}

/// Get a clone of the current context.
pub fn head_context() -> HeadContext {
    CURRENT_CONTEXT.with(|current| current.borrow().clone())
}

/// Set how contributors are evaluated on this thread.
pub fn set_execution(execution: Execution) {
    EXECUTION.with(|current| current.set(execution));
}

/// Current execution mode.
pub fn execution() -> Execution {
    EXECUTION.with(|current| current.get())
}

/// Reset context and execution mode (for testing).
pub fn reset_head_context() {
    set_head_context(HeadContext::new());
    set_execution(Execution::Interactive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_default_context() {
        let ctx = HeadContext::new();
        assert!(!ctx.is_restricted());
        assert!(!ctx.can_publish());
        ctx.publish(&[]);
    }

    #[test]
    fn test_publish_callback() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let ctx = HeadContext::restricted(true).with_publish(move |head| {
            sink.borrow_mut().extend_from_slice(head);
        });

        assert!(ctx.is_restricted());
        ctx.publish(&[Element::title("t")]);
        assert_eq!(received.borrow().len(), 1);

        let quiet = ctx.without_publish();
        assert!(quiet.is_restricted());
        assert!(!quiet.can_publish());
        quiet.publish(&[Element::title("t")]);
        assert_eq!(received.borrow().len(), 1);
    }

    #[test]
    fn test_from_signals() {
        let amp = signal(false);
        let target = signal(Vec::<Element>::new());
        let ctx = HeadContext::from_signals(amp.clone(), target.clone());

        assert!(!ctx.is_restricted());
        amp.set(true);
        assert!(ctx.is_restricted());

        ctx.publish(&[Element::meta().attr("charset", "utf-8")]);
        assert_eq!(target.get().len(), 1);
    }

    #[test]
    fn test_thread_local_context() {
        reset_head_context();
        assert_eq!(execution(), Execution::Interactive);

        set_execution(Execution::SingleShot);
        set_head_context(HeadContext::restricted(true));
        assert_eq!(execution(), Execution::SingleShot);
        assert!(head_context().is_restricted());

        reset_head_context();
        assert!(!head_context().is_restricted());
    }
}
