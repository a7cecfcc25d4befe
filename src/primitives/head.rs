//! Head Primitive - Contribute tags to the document head.
//!
//! Each call creates one contributor in the thread's head state.
//!
//! # Execution
//!
//! - **Interactive**: an effect mounts the contributor on its first run and
//!   calls `on_update` on every later run. The effect tracks the `children`
//!   source and the context's restricted-mode getter, so changing either
//!   recomputes and republishes the merged head. The returned cleanup
//!   unmounts.
//! - **SingleShot**: the children are read once, the contributor registers
//!   and recomputes inline, and the cleanup does nothing. The host collects
//!   the result with [`rewind`](crate::engine::rewind) after the pass.
//!
//! # Example
//!
//! ```ignore
//! use spark_head::{head, Element, HeadProps};
//!
//! let cleanup = head(HeadProps::new(vec![
//!     Element::title("Dashboard"),
//!     Element::meta().attr("name", "description").attr("content", "Live stats"),
//! ]));
//!
//! // Later: remove this block's tags from the head
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose};

use crate::context::{Execution, execution, head_context};
use crate::engine::{Contributor, Phase, with_head_state};
use super::types::{Cleanup, HeadProps};

// =============================================================================
// Head Component
// =============================================================================

/// Create a head block.
///
/// Returns a cleanup function that unmounts the block when called.
pub fn head(props: HeadProps) -> Cleanup {
    let context = head_context();
    let mut contributor = with_head_state(Contributor::new);

    if execution() == Execution::SingleShot {
        let contribution = props.children.get();
        let quiet = context.without_publish();
        let merged = with_head_state(|state| {
            contributor.render(state, &quiet, contribution, Execution::SingleShot)
        });
        if let Some(merged) = merged {
            context.publish(&merged);
        }
        return Box::new(|| {});
    }

    let contributor = Rc::new(RefCell::new(contributor));
    let scope = effect_scope();

    let contributor_for_effect = contributor.clone();
    let context_for_effect = context.clone();
    let children = props.children;

    scope.run(move || {
        // First run mounts, later runs update
        let _effect_cleanup = effect(move || {
            let contribution = children.get();
            let quiet = context_for_effect.without_publish();
            let merged = {
                let mut contributor = contributor_for_effect.borrow_mut();
                with_head_state(|state| {
                    if contributor.phase() == Phase::Mounted {
                        contributor.on_update(state, &quiet, contribution)
                    } else {
                        contributor.render(state, &quiet, contribution, Execution::Interactive);
                        contributor.on_mount(state, &quiet)
                    }
                })
            };
            context_for_effect.publish(&merged);
        });

        on_scope_dispose(move || {
            let quiet = context.without_publish();
            let merged = {
                let mut contributor = contributor.borrow_mut();
                with_head_state(|state| contributor.on_unmount(state, &quiet))
            };
            context.publish(&merged);
        });
    });

    Box::new(move || {
        scope.stop();
    })
}
