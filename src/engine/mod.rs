//! Head Engine - Registry and contributor lifecycle.
//!
//! The engine manages the core data structures:
//! - Registry: live contribution handles, merged result, rewind
//! - Contributor: per-block state machine driving the registry
//!
//! # Flow
//!
//! ```text
//! Contributor hooks → register/unregister → recompute → publish
//!                                               ↓
//!                                         latched result → rewind()
//! ```
//!
//! Everything runs synchronously on one thread. A hook's recompute finishes
//! before the hook returns.

mod contributor;
mod registry;

pub use contributor::*;
pub use registry::*;
