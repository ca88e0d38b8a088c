//! Reverse conversion tests (HTML -> dialect)

use coursemark::to_text;
use insta::assert_snapshot;

#[test]
fn test_reference_document() {
    let html = "<h2>Hi</h2><p>Hello <strong>world</strong></p>";
    assert_eq!(to_text(html), "## Hi\n\nHello **world**");
}

#[test]
fn test_full_document() {
    let html = "<h1>Intro</h1>\
                <p>Some <em>text</em> and <code>code</code>.</p>\
                <ul><li>A<ul><li>B</li></ul></li><li>C</li></ul>\
                <ol><li>first</li><li>second</li></ol>\
                <blockquote>quoted</blockquote>\
                <pre><code>fn main() {}\n</code></pre>\
                <p><a href=\"https://x.io\">link</a></p>";
    assert_snapshot!(to_text(html), @r#"
    # Intro

    Some _text_ and `code`.

    - A
      - B
    - C

    1. first
    2. second

    > quoted

    ```
    fn main() {}
    ```

    [link](https://x.io)
    "#);
}

#[test]
fn test_foreign_tags_are_unwrapped() {
    assert_eq!(to_text("<div><p>x</p></div>"), "x");
    assert_eq!(
        to_text("<article><h1>T</h1><footer>f</footer></article>"),
        "# T\n\nf"
    );
}

#[test]
fn test_full_html_document_shell_is_ignored() {
    let html = "<!DOCTYPE html><html><head><title>t</title></head>\
                <body><p>content</p></body></html>";
    assert_eq!(to_text(html), "content");
}

#[test]
fn test_malformed_html_is_tolerated() {
    // The parser recovers; the converter never fails.
    assert_eq!(to_text("<p>unclosed"), "unclosed");
    assert_eq!(to_text("<h1>a<h2>b"), "# a\n\n## b");
}

#[test]
fn test_ordered_list_renumbers_from_one() {
    assert_eq!(
        to_text("<ol><li>x</li><li>y</li></ol>"),
        "1. x\n2. y"
    );
}

#[test]
fn test_br_inside_paragraph() {
    assert_eq!(to_text("<p>a<br>b</p>"), "a\nb");
}
