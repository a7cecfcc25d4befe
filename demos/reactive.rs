//! Reactive Example - Head blocks that mount, update and unmount
//!
//! This example demonstrates:
//! - Publishing the merged head into a signal
//! - Updating a head block through a signal
//! - Restoring the previous title when a block unmounts
//! - Switching to restricted mode
//!
//! Run with: cargo run --example reactive

use spark_head::{
    head, render_head, reset_head_state, set_head_context, Contribution, Element, HeadContext,
    HeadProps, PropValue,
};
use spark_signals::{signal, Signal};

fn main() {
    reset_head_state();

    let amp = signal(false);
    let published = signal(Vec::<Element>::new());
    set_head_context(HeadContext::from_signals(amp.clone(), published.clone()));

    println!("=== spark-head Reactive Example ===\n");

    let _page = head(HeadProps::new(vec![Element::title("Inbox")]));
    println!("Page mounted:\n{}\n", render_head(&published.get()));

    let unread: Signal<Contribution> = signal(vec![Element::title("Inbox (1)").into()]);
    let counter = head(HeadProps {
        children: PropValue::Signal(unread.clone()),
    });
    println!("Counter mounted:\n{}\n", render_head(&published.get()));

    unread.set(vec![Element::title("Inbox (2)").into()]);
    println!("Counter updated:\n{}\n", render_head(&published.get()));

    counter();
    println!("Counter unmounted:\n{}\n", render_head(&published.get()));

    amp.set(true);
    println!("Restricted mode:\n{}", render_head(&published.get()));
}
