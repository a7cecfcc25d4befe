//! Contributor - Lifecycle of one head block in the component tree.
//!
//! # State machine
//!
//! ```text
//!              render (SingleShot)
//! Unmounted ───────────────────────→ Registering
//!     │                                   │
//!     │ on_mount                          │ on_mount
//!     ↓                                   ↓
//!  Mounted ←──────── on_update ───────  Mounted
//!     │
//!     │ on_unmount
//!     ↓
//! Unmounted
//! ```
//!
//! Every entry point overwrites the contributor's own contribution first, so
//! the recompute it triggers always sees the latest content.

use crate::context::{Execution, HeadContext};
use crate::types::{Contribution, Element};

use super::registry::{ContributionHandle, ContributorId, HeadState};

/// Where a contributor is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unmounted,
    /// Registered inline during a single-shot evaluation.
    Registering,
    Mounted,
}

/// One head block: owns a contribution handle and drives registration.
///
/// # Example
///
/// ```ignore
/// use spark_head::{Contributor, Element, Execution, HeadContext, HeadState};
///
/// let mut state = HeadState::new();
/// let ctx = HeadContext::new();
///
/// let mut contributor = Contributor::new(&mut state);
/// contributor.render(&mut state, &ctx, vec![Element::title("Home").into()], Execution::Interactive);
/// contributor.on_mount(&mut state, &ctx);
///
/// contributor.on_update(&mut state, &ctx, vec![Element::title("About").into()]);
/// contributor.on_unmount(&mut state, &ctx);
/// ```
#[derive(Debug)]
pub struct Contributor {
    handle: ContributionHandle,
    phase: Phase,
}

impl Contributor {
    /// Create an unmounted contributor with a fresh ID from `state`.
    pub fn new(state: &mut HeadState) -> Self {
        Self {
            handle: ContributionHandle::new(state.next_contributor_id()),
            phase: Phase::Unmounted,
        }
    }

    pub fn id(&self) -> ContributorId {
        self.handle.id()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn handle(&self) -> &ContributionHandle {
        &self.handle
    }

    /// Evaluate with new content.
    ///
    /// Single-shot execution has no mount hook, so an unmounted contributor
    /// registers and recomputes inline. Interactive execution only stores the
    /// content; registration waits for [`on_mount`](Self::on_mount).
    pub fn render(
        &mut self,
        state: &mut HeadState,
        context: &HeadContext,
        contribution: Contribution,
        execution: Execution,
    ) -> Option<Vec<Element>> {
        self.handle.set(contribution);

        if execution == Execution::SingleShot && self.phase == Phase::Unmounted {
            state.register(&self.handle);
            self.phase = Phase::Registering;
            return Some(state.recompute_and_publish(context));
        }
        None
    }

    /// Mount hook: register and recompute.
    pub fn on_mount(&mut self, state: &mut HeadState, context: &HeadContext) -> Vec<Element> {
        state.register(&self.handle);
        self.phase = Phase::Mounted;
        state.recompute_and_publish(context)
    }

    /// Update hook: replace the contribution and recompute.
    pub fn on_update(
        &mut self,
        state: &mut HeadState,
        context: &HeadContext,
        contribution: Contribution,
    ) -> Vec<Element> {
        self.handle.set(contribution);
        state.recompute_and_publish(context)
    }

    /// Unmount hook: unregister, then recompute for the remaining contributors.
    pub fn on_unmount(&mut self, state: &mut HeadState, context: &HeadContext) -> Vec<Element> {
        state.unregister(&self.handle);
        self.phase = Phase::Unmounted;
        state.recompute_and_publish(context)
    }
}
