//! Head Registry - Live contributions and the latched merged result.
//!
//! Manages:
//! - Contributor ID allocation (stable for a contributor's lifetime)
//! - Registered handles in registration order
//! - The last merged result, consumed once by [`HeadState::rewind`]
//!
//! [`HeadState`] is an explicit state object so tests and hosts can own an
//! isolated instance. A thread-local instance backs the free functions at the
//! bottom of this module for hosts that want a process-wide head.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::config::HeadConfig;
use crate::context::HeadContext;
use crate::reconcile::reconcile;
use crate::types::{Contribution, Element};

// =============================================================================
// Contribution Handles
// =============================================================================

/// Stable identity of one contributor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContributorId(pub u64);

/// Mutable cell holding one contributor's current contribution.
///
/// The contributor and the registry share the cell; identity is the
/// [`ContributorId`], never the content.
#[derive(Clone, Debug)]
pub struct ContributionHandle {
    id: ContributorId,
    content: Rc<RefCell<Contribution>>,
}

impl ContributionHandle {
    pub fn new(id: ContributorId) -> Self {
        Self {
            id,
            content: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn id(&self) -> ContributorId {
        self.id
    }

    /// Replace the contribution wholesale.
    pub fn set(&self, contribution: Contribution) {
        *self.content.borrow_mut() = contribution;
    }

    /// Borrow the current contribution.
    pub fn content(&self) -> Ref<'_, Contribution> {
        self.content.borrow()
    }
}

// =============================================================================
// HeadState
// =============================================================================

/// Registry of live contributions plus the latched merged result.
#[derive(Debug, Default)]
pub struct HeadState {
    config: HeadConfig,
    registry: IndexMap<ContributorId, ContributionHandle>,
    merged: Option<Vec<Element>>,
    next_id: u64,
}

impl HeadState {
    /// Empty registry, no merged result, default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry using `config` for reconciliation.
    pub fn with_config(config: HeadConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HeadConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next recompute.
    pub fn set_config(&mut self, config: HeadConfig) {
        self.config = config;
    }

    /// Allocate an ID for a new contributor.
    pub fn next_contributor_id(&mut self) -> ContributorId {
        let id = ContributorId(self.next_id);
        self.next_id += 1;
        id
    }

    // -------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------

    /// Add a handle if absent. Returns true if the registry changed.
    pub fn register(&mut self, handle: &ContributionHandle) -> bool {
        if self.registry.contains_key(&handle.id) {
            return false;
        }
        self.registry.insert(handle.id, handle.clone());
        tracing::debug!(id = handle.id.0, live = self.registry.len(), "registered head contribution");
        true
    }

    /// Remove a handle if present. Returns true if the registry changed.
    ///
    /// Remaining handles keep their registration order.
    pub fn unregister(&mut self, handle: &ContributionHandle) -> bool {
        let removed = self.registry.shift_remove(&handle.id).is_some();
        if removed {
            tracing::debug!(id = handle.id.0, live = self.registry.len(), "unregistered head contribution");
        }
        removed
    }

    pub fn contains(&self, id: ContributorId) -> bool {
        self.registry.contains_key(&id)
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Registered IDs in registration order.
    pub fn contributor_ids(&self) -> Vec<ContributorId> {
        self.registry.keys().copied().collect()
    }

    // -------------------------------------------------------------------------
    // Recompute
    // -------------------------------------------------------------------------

    /// Reconcile every registered contribution and latch the result.
    pub fn recompute(&mut self, restricted: bool) -> Vec<Element> {
        let merged = {
            let contents: Vec<Ref<'_, Contribution>> =
                self.registry.values().map(ContributionHandle::content).collect();
            reconcile(contents.iter().map(|c| c.as_slice()), &self.config, restricted)
        };
        tracing::debug!(
            contributors = self.registry.len(),
            elements = merged.len(),
            restricted,
            "recomputed head"
        );
        self.merged = Some(merged.clone());
        merged
    }

    /// Recompute using the context's mode, then publish if a target exists.
    pub fn recompute_and_publish(&mut self, context: &HeadContext) -> Vec<Element> {
        let merged = self.recompute(context.is_restricted());
        context.publish(&merged);
        merged
    }

    /// Last merged result, if any recompute happened since the last rewind.
    pub fn merged(&self) -> Option<&[Element]> {
        self.merged.as_deref()
    }

    // -------------------------------------------------------------------------
    // Rewind
    // -------------------------------------------------------------------------

    /// Take the latched result and reset to empty.
    ///
    /// Returns `None` if nothing was computed since the last rewind. The
    /// registry is cleared either way; contributor IDs keep increasing.
    pub fn rewind(&mut self) -> Option<Vec<Element>> {
        let merged = self.merged.take();
        let dropped = self.registry.len();
        self.registry.clear();
        tracing::debug!(dropped, had_result = merged.is_some(), "rewound head state");
        merged
    }
}

// =============================================================================
// Thread-local instance
// =============================================================================

thread_local! {
    static HEAD_STATE: RefCell<HeadState> = RefCell::new(HeadState::new());
}

/// Run `f` with the thread's head state.
///
/// `f` must not call back into head functions on this thread.
pub fn with_head_state<R>(f: impl FnOnce(&mut HeadState) -> R) -> R {
    HEAD_STATE.with(|state| f(&mut state.borrow_mut()))
}

/// Recompute the thread's head state and publish to `context`.
///
/// The state borrow is released before publishing, so a publish target may
/// synchronously trigger other contributors.
pub fn recompute_and_publish(context: &HeadContext) -> Vec<Element> {
    let restricted = context.is_restricted();
    let merged = with_head_state(|state| state.recompute(restricted));
    context.publish(&merged);
    merged
}

/// Take the thread's merged result and reset its registry.
///
/// Call once after a complete single-shot render pass.
pub fn rewind() -> Option<Vec<Element>> {
    with_head_state(HeadState::rewind)
}

/// Replace the configuration of the thread's head state.
pub fn configure(config: HeadConfig) {
    with_head_state(|state| state.set_config(config));
}

/// Reset the thread's head state (for testing).
pub fn reset_head_state() {
    with_head_state(|state| *state = HeadState::new());
}
