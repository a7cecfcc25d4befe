//! Reconciler - Merge every contribution into one head.
//!
//! Pure function of its inputs. The pipeline:
//!
//! ```text
//! contributions (oldest first)
//!   → flatten          fragments spliced, text dropped, children re-keyed
//!   → reverse          newest first, so the filter keeps the last write
//!   → + defaults       reversed too, considered last (lowest precedence)
//!   → unique filter    title/base/charset/meta categories/reserved keys
//!   → reverse          defaults first, then contributions in original order
//!   → finalize         explicit key + marker class on every element
//! ```
//!
//! A contributor overriding a default (say, its own viewport meta) therefore
//! replaces it, and a later-registered contributor overrides an earlier one.

mod flatten;
mod unique;

pub use flatten::{AUTO_KEY_PREFIX, auto_key, flatten, flatten_all, is_auto_key};
pub use unique::UniqueFilter;

use crate::config::HeadConfig;
use crate::defaults::default_head_with;
use crate::types::{Element, Node};

/// Merge contributions (oldest-registered first) into the final head.
pub fn reconcile<'a>(
    contributions: impl IntoIterator<Item = &'a [Node]>,
    config: &HeadConfig,
    restricted: bool,
) -> Vec<Element> {
    let mut candidates = flatten_all(contributions);
    candidates.reverse();
    candidates.extend(default_head_with(config, restricted).into_iter().rev());

    let mut filter = UniqueFilter::new();
    let mut survivors: Vec<Element> = candidates
        .into_iter()
        .filter(|el| {
            let keep = filter.admit(el);
            if !keep {
                tracing::trace!(tag = el.tag(), key = ?el.get_key(), "dropped duplicate head element");
            }
            keep
        })
        .collect();
    survivors.reverse();

    finalize(survivors, &config.class_name)
}

/// Give every element an explicit key and the marker class.
///
/// A `title` without a class of its own is left unclassed.
fn finalize(elements: Vec<Element>, class_name: &str) -> Vec<Element> {
    elements
        .into_iter()
        .enumerate()
        .map(|(index, el)| {
            let el = match el.get_key() {
                Some(_) => el,
                None => el.with_key(index.to_string()),
            };
            if el.is("title") && !el.has_attr("class") {
                el
            } else {
                el.with_class(class_name)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Contribution;

    fn run(contributions: &[Contribution], restricted: bool) -> Vec<Element> {
        reconcile(
            contributions.iter().map(|c| c.as_slice()),
            &HeadConfig::default(),
            restricted,
        )
    }

    fn count(head: &[Element], f: impl Fn(&Element) -> bool) -> usize {
        head.iter().filter(|el| f(el)).count()
    }

    fn description(content: &str) -> Node {
        Element::meta()
            .attr("name", "description")
            .attr("content", content)
            .into()
    }

    #[test]
    fn test_empty_registry_yields_defaults() {
        let head = run(&[], false);
        assert_eq!(head.len(), 2);
        assert_eq!(head[0].get_attr("charset"), Some("utf-8"));
        assert_eq!(head[1].get_attr("name"), Some("viewport"));
    }

    #[test]
    fn test_restricted_defaults() {
        let head = run(&[], true);
        assert_eq!(head.len(), 1);
        assert!(head[0].has_attr("charset"));
        assert_eq!(count(&head, |el| el.get_attr("name") == Some("viewport")), 0);
    }

    #[test]
    fn test_restricted_mode_keeps_explicit_viewport() {
        let viewport: Contribution = vec![
            Element::meta()
                .attr("name", "viewport")
                .attr("content", "width=320")
                .into(),
        ];
        let head = run(&[viewport], true);
        assert_eq!(head.len(), 2);
        assert_eq!(head[1].get_attr("content"), Some("width=320"));
    }

    #[test]
    fn test_later_description_wins() {
        let a: Contribution = vec![description("x")];
        let b: Contribution = vec![description("y")];
        let head = run(&[a, b], false);

        let descriptions: Vec<_> = head
            .iter()
            .filter(|el| el.get_attr("name") == Some("description"))
            .collect();
        assert_eq!(descriptions.len(), 1);
        assert_eq!(descriptions[0].get_attr("content"), Some("y"));
    }

    #[test]
    fn test_distinct_names_both_survive() {
        let a: Contribution = vec![description("x")];
        let b: Contribution = vec![
            Element::meta()
                .attr("name", "keywords")
                .attr("content", "k")
                .into(),
        ];
        let head = run(&[a, b], false);
        assert_eq!(count(&head, |el| el.has_attr("name")), 3);
    }

    #[test]
    fn test_single_title_most_recent() {
        let a: Contribution = vec![Element::title("first").into()];
        let b: Contribution = vec![Element::title("second").into()];
        let c: Contribution = vec![Element::new("base").attr("href", "/a").into()];
        let d: Contribution = vec![Element::new("base").attr("href", "/b").into()];
        let head = run(&[a, b, c, d], false);

        let titles: Vec<_> = head.iter().filter(|el| el.is("title")).collect();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].text_content(), "second");

        let bases: Vec<_> = head.iter().filter(|el| el.is("base")).collect();
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].get_attr("href"), Some("/b"));
    }

    #[test]
    fn test_single_charset_overrides_default() {
        let a: Contribution = vec![Element::meta().attr("charSet", "iso-8859-1").into()];
        let b: Contribution = vec![Element::meta().attr("charset", "utf-16").into()];
        let head = run(&[a, b], false);

        let charsets: Vec<_> = head.iter().filter(|el| el.has_attr("charset")).collect();
        assert_eq!(charsets.len(), 1);
        assert_eq!(charsets[0].get_attr("charset"), Some("utf-16"));
    }

    #[test]
    fn test_defaults_come_first_when_kept() {
        let a: Contribution = vec![Element::title("t").into(), description("d")];
        let head = run(&[a], false);
        let tags: Vec<_> = head
            .iter()
            .map(|el| {
                el.get_attr("charset")
                    .map(|_| "charset")
                    .or(el.get_attr("name"))
                    .unwrap_or(el.tag())
            })
            .collect();
        assert_eq!(tags, vec!["charset", "viewport", "title", "description"]);
    }

    #[test]
    fn test_overridden_viewport_keeps_contribution_position() {
        let a: Contribution = vec![
            Element::title("t").into(),
            Element::meta()
                .attr("name", "viewport")
                .attr("content", "width=500")
                .into(),
        ];
        let head = run(&[a], false);
        assert_eq!(head.len(), 3);
        assert!(head[0].has_attr("charset"));
        assert!(head[1].is("title"));
        assert_eq!(head[2].get_attr("content"), Some("width=500"));
    }

    #[test]
    fn test_reserved_key_dedup_ignores_tag() {
        let a: Contribution = vec![Element::new("link").attr("rel", "icon").key("icon").into()];
        let b: Contribution = vec![
            Element::new("link")
                .attr("rel", "icon")
                .attr("href", "/b.png")
                .key("icon")
                .into(),
        ];
        let head = run(&[a, b], false);
        let icons: Vec<_> = head.iter().filter(|el| el.is("link")).collect();
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].get_attr("href"), Some("/b.png"));
    }

    #[test]
    fn test_keyed_titles_both_survive() {
        let a: Contribution = vec![
            Element::title("a").key("one").into(),
            Element::title("b").key("two").into(),
        ];
        let head = run(&[a], false);
        assert_eq!(count(&head, |el| el.is("title")), 2);
    }

    #[test]
    fn test_unrecognized_tags_never_dedup() {
        let link = || -> Node { Element::new("link").attr("rel", "stylesheet").into() };
        let a: Contribution = vec![link(), link()];
        let b: Contribution = vec![link()];
        let head = run(&[a, b], false);
        assert_eq!(count(&head, |el| el.is("link")), 3);
    }

    #[test]
    fn test_fragments_and_text_in_contribution() {
        let a: Contribution = vec![
            Node::from("text"),
            Node::fragment([Element::title("inside").into(), Node::from(7)]),
        ];
        let head = run(&[a], false);
        assert_eq!(head.len(), 3);
        assert_eq!(head[2].text_content(), "inside");
    }

    #[test]
    fn test_finalize_keys_and_classes() {
        let a: Contribution = vec![
            Element::title("plain").into(),
            Element::new("link").attr("class", "css").into(),
        ];
        let head = run(&[a], false);

        assert!(head.iter().all(|el| el.get_key().is_some()));
        assert_eq!(head[0].get_key(), Some("charset"));

        let title = &head[2];
        assert!(!title.has_attr("class"));

        let link = &head[3];
        assert_eq!(link.get_attr("class"), Some("css spark-head"));
        assert_eq!(head[0].get_attr("class"), Some("spark-head"));
    }

    #[test]
    fn test_classed_title_gets_marker() {
        let a: Contribution = vec![Element::title("t").attr("class", "x").into()];
        let head = run(&[a], true);
        assert_eq!(head[1].get_attr("class"), Some("x spark-head"));
    }

    #[test]
    fn test_finalize_assigns_index_to_unkeyed() {
        let head = finalize(vec![Element::new("link"), Element::meta().key("k")], "m");
        assert_eq!(head[0].get_key(), Some("0"));
        assert_eq!(head[1].get_key(), Some("k"));
    }

    #[test]
    fn test_custom_marker_class() {
        let head = reconcile(std::iter::empty::<&[Node]>(), &HeadConfig::with_class_name("mine"), false);
        assert!(head.iter().all(|el| el.get_attr("class") == Some("mine")));
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let a: Contribution = vec![description("x"), Element::title("t").into()];
        let contributions = vec![a];
        assert_eq!(run(&contributions, false), run(&contributions, false));
    }
}
