//! Head Primitives - Declarative head blocks for component trees.
//!
//! This module provides:
//! - [`head`] - Contribute tags to the document head
//!
//! # Architecture
//!
//! Each head block is a contributor in the thread's head state. It:
//! 1. Allocates a contributor ID
//! 2. Registers its contribution (on mount, or inline in single-shot passes)
//! 3. Recomputes and publishes the merged head after every change
//! 4. Returns a cleanup function that unregisters it
//!
//! # Reactivity
//!
//! Children can be:
//! - Static values: `HeadProps::new(vec![Element::title("Home")])`
//! - Signals: `children: PropValue::Signal(children_signal)` (stays connected!)
//! - Getters: `children: PropValue::Getter(Rc::new(|| build_tags()))`

mod types;
mod head;

pub use types::*;
pub use head::head;
