//! Inline formatting tests through the public API

use coursemark::to_html;

#[test]
fn test_inline_composition() {
    assert_eq!(
        to_html("**bold** and _em_ and `code`"),
        "<p><strong>bold</strong> and <em>em</em> and <code>code</code></p>"
    );
}

#[test]
fn test_image_substitution_beats_link() {
    let html = to_html("![a](https://x/y.png)");
    assert!(html.starts_with("<p><img "));
    assert!(!html.contains("<a "));
}

#[test]
fn test_link_attributes() {
    assert_eq!(
        to_html("[docs](https://docs.example.com)"),
        "<p><a href=\"https://docs.example.com\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a></p>"
    );
}

#[test]
fn test_malformed_link_degrades_to_literal_text() {
    assert_eq!(
        to_html("[x](not-a-url)"),
        "<p>[x](not-a-url)</p>"
    );
}

#[test]
fn test_code_span_shields_emphasis() {
    assert_eq!(
        to_html("`**not bold**`"),
        "<p><code>**not bold**</code></p>"
    );
}

#[test]
fn test_escaping_applies_inside_emphasis() {
    assert_eq!(
        to_html("**a < b**"),
        "<p><strong>a &lt; b</strong></p>"
    );
}

#[test]
fn test_emphasis_inside_heading_and_blockquote() {
    assert_eq!(to_html("# A **B**"), "<h1>A <strong>B</strong></h1>");
    assert_eq!(to_html("> ~~old~~"), "<blockquote><s>old</s></blockquote>");
}
