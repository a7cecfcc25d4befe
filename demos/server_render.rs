//! Server Render Example - Single-shot head collection
//!
//! This example renders a page twice the way a server would:
//! - Head blocks evaluate once and register inline
//! - The merged head is taken with `rewind()` after the pass
//! - The registry is empty again for the next request
//!
//! Run with: cargo run --example server_render

use spark_head::{
    head, render_head, reset_head_state, rewind, set_execution, Element, Execution, HeadProps,
    Node,
};

fn layout() {
    head(HeadProps::new(vec![
        Element::title("My Site"),
        Element::meta().attr("name", "description").attr("content", "Site description"),
    ]));
}

fn article_page(title: &str) {
    layout();
    head(HeadProps::new(vec![
        Node::from(Element::title(title)),
        Node::fragment([
            Element::meta().attr("name", "description").attr("content", "Article summary").into(),
            Element::meta().attr("property", "og:title").attr("content", title).into(),
        ]),
    ]));
}

fn main() {
    reset_head_state();
    set_execution(Execution::SingleShot);

    println!("=== spark-head Server Render Example ===\n");

    for title in ["First post", "Second post"] {
        article_page(title);

        let merged = rewind().unwrap_or_default();
        println!("<head>\n{}\n</head>\n", render_head(&merged));
    }

    assert!(rewind().is_none());
    println!("Registry reset between passes.");
}
