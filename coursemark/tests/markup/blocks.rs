//! Block-level rendering tests (dialect -> HTML)

use crate::common::kitchen_sink;
use coursemark::{to_html, to_html_with_options, RenderOptions};
use insta::assert_snapshot;

#[test]
fn test_kitchen_sink_document() {
    let html = to_html(kitchen_sink());
    assert_snapshot!(html, @r#"
    <h1>Course Intro</h1><p>Welcome to the <strong>course</strong>.</p><h2>Topics</h2><ul><li>Basics<ul><li>Setup</li></ul></li><li>Practice</li></ul><ol><li>Read</li><li>Try it</li></ol><blockquote>Stay <em>curious</em>.</blockquote><pre><code>let x = 1;
    </code></pre><p><img src="https://img.example.com/d.png" alt="diagram" loading="lazy" style="max-width:100%;border-radius:8px;margin:8px 0;"></p><p>See <a href="https://docs.example.com/start" target="_blank" rel="noopener noreferrer">the docs</a>.</p>
    "#);
}

#[test]
fn test_heading_levels() {
    assert_eq!(to_html("# One"), "<h1>One</h1>");
    assert_eq!(to_html("## Two"), "<h2>Two</h2>");
    assert_eq!(to_html("### Three"), "<h3>Three</h3>");
    assert_eq!(to_html("#### Four"), "<h4>Four</h4>");
    assert_eq!(to_html("##### Five"), "<p>##### Five</p>");
}

#[test]
fn test_list_nesting_structure() {
    assert_eq!(
        to_html("- A\n  - B\n- C"),
        "<ul><li>A<ul><li>B</li></ul></li><li>C</li></ul>"
    );
}

#[test]
fn test_fence_suppresses_all_block_rules() {
    let html = to_html("```\n# heading\n> quote\n- list\n```");
    assert_eq!(
        html,
        "<pre><code># heading\n&gt; quote\n- list\n</code></pre>"
    );
}

#[test]
fn test_consecutive_blocks_have_no_separator() {
    assert_eq!(
        to_html("# H\npara\n> q"),
        "<h1>H</h1><p>para</p><blockquote>q</blockquote>"
    );
}

#[test]
fn test_render_options_disable_lazy_loading() {
    let options = RenderOptions {
        lazy_images: false,
        image_style: "width:50px;".to_string(),
    };
    assert_eq!(
        to_html_with_options("![a](https://x/y.png)", &options),
        "<p><img src=\"https://x/y.png\" alt=\"a\" style=\"width:50px;\"></p>"
    );
}

#[test]
fn test_untrusted_text_never_reaches_output_unescaped() {
    let html = to_html("<script>alert(1)</script>\n> <b>\n- <i>x");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(!html.contains("<i>"));
}
