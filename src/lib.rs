//! # spark-head
//!
//! Declarative document head management for reactive component trees.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Any number of head blocks, mounted anywhere in the tree, contribute tags.
//! Every change recomputes one merged, deduplicated head:
//!
//! ```text
//! head blocks → registry (registration order) → reconcile → publish / rewind
//! ```
//!
//! Reconciliation rules:
//! - the most recently registered contribution wins among duplicates
//! - one `title`, one `base`, one `meta charset` per document
//! - one `meta` per `name` / `http-equiv` / `itemprop` value
//! - caller keys dedup by key alone
//! - built-in defaults (charset, viewport) lose to any contribution
//!
//! Interactive hosts mount head blocks and react to the published result.
//! Single-shot hosts (server rendering) render once, then call [`rewind`] to
//! take the merged head and reset the registry for the next pass.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Node, Element, MetaCategory)
//! - [`reconcile`] - Flatten, dedup and order contributions
//! - [`defaults`] - Default charset/viewport contribution
//! - [`engine`] - Registry, merged result, contributor lifecycle
//! - [`context`] - Restricted-mode flag and publish target
//! - [`primitives`] - The reactive `head` block
//! - [`renderer`] - HTML serialization
//! - [`config`] - Marker class and default content

pub mod config;
pub mod context;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod primitives;
pub mod reconcile;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::HeadConfig;
pub use error::ConfigError;

pub use context::{
    execution, head_context, reset_head_context, set_execution, set_head_context, Execution,
    HeadContext, PublishFn,
};

pub use defaults::{default_head, default_head_with};

pub use engine::{
    configure, recompute_and_publish, reset_head_state, rewind, with_head_state,
    ContributionHandle, Contributor, ContributorId, HeadState, Phase,
};

pub use primitives::{head, Cleanup, HeadProps, PropValue};

pub use reconcile::{reconcile, UniqueFilter, AUTO_KEY_PREFIX};

pub use renderer::{render_element, render_head};
