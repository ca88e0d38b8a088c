//! Round-trip fidelity: markup -> HTML -> markup -> HTML
//!
//! The contract is re-render idempotence: converting a document's HTML back
//! to text and rendering that text again must reproduce the same HTML. Exact
//! textual equality of the intermediate markup is not promised (the reverse
//! direction normalizes indentation and ordered-item numbering), but for
//! documents already in normal form it holds too.

use crate::common::kitchen_sink;
use coursemark::{to_html, to_text};
use proptest::prelude::*;

fn rerender(markup: &str) -> (String, String) {
    let html = to_html(markup);
    let html_again = to_html(&to_text(&html));
    (html, html_again)
}

#[test]
fn test_kitchen_sink_is_a_fixed_point() {
    let markup = kitchen_sink();
    let html = to_html(markup);
    // Already in normal form: the text itself survives the trip.
    assert_eq!(to_text(&html), markup);
    assert_eq!(to_html(&to_text(&html)), html);
}

#[test]
fn test_denormalized_markup_converges() {
    // Odd indentation and restarted numbering normalize on the first render;
    // from then on the trip is stable.
    let markup = "- A\n   - B\n- C\n\n7. x\n9. y";
    let (html, html_again) = rerender(markup);
    assert_eq!(html_again, html);
}

#[test]
fn test_fences_do_not_accrete_blank_lines() {
    let markup = "```\nlet x = 1;\nlet y = 2;\n```";
    let html = to_html(markup);
    assert_eq!(to_text(&html), markup);
    assert_eq!(to_html(&to_text(&html)), html);
}

#[test]
fn test_links_and_images_survive_the_trip() {
    let markup = "![a](https://x/y.png)\n\n[**b**](https://x.io)";
    let (html, html_again) = rerender(markup);
    assert_eq!(html_again, html);
}

fn plain_text() -> impl Strategy<Value = String> {
    "[a-z]{1,6}( [a-z]{1,6}){0,2}".prop_map(|s| s)
}

fn inline_text() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_text(),
        "[a-z]{1,6}".prop_map(|w| format!("**{w}**")),
        "[a-z]{1,6}".prop_map(|w| format!("_{w}_")),
        "[a-z]{1,6}".prop_map(|w| format!("~~{w}~~")),
        "[a-z]{1,6}".prop_map(|w| format!("`{w}`")),
        "[a-z]{1,6}".prop_map(|w| format!("[{w}](https://example.com/{w})")),
    ]
}

fn list_block() -> impl Strategy<Value = String> {
    let item = (any::<bool>(), 0usize..=2, "[a-z]{1,6}");
    prop::collection::vec(item, 1..5).prop_map(|items| {
        items
            .into_iter()
            .map(|(ordered, depth, word)| {
                let indent = "  ".repeat(depth);
                let marker = if ordered { "1. " } else { "- " };
                format!("{indent}{marker}{word}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn block() -> impl Strategy<Value = String> {
    prop_oneof![
        inline_text(),
        (1usize..=4, inline_text()).prop_map(|(n, t)| format!("{} {t}", "#".repeat(n))),
        inline_text().prop_map(|t| format!("> {t}")),
        list_block(),
        prop::collection::vec("[a-z =;]{1,10}", 1..3)
            .prop_map(|lines| format!("```\n{}\n```", lines.join("\n"))),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(block(), 1..6).prop_map(|blocks| blocks.join("\n\n"))
}

proptest! {
    /// The first render normalizes; from then on the HTML is a fixed point.
    #[test]
    fn test_rerender_idempotence(markup in document()) {
        let html = to_html(&markup);
        let html_again = to_html(&to_text(&html));
        prop_assert_eq!(html_again, html);
    }

    /// Both directions are total.
    #[test]
    fn test_conversions_never_panic(input in "\\PC{0,200}") {
        let _ = to_html(&input);
        let _ = to_text(&input);
    }
}
