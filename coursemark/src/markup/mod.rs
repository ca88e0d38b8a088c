//! Forward direction: coursemark dialect -> HTML
//!
//! This module renders the line-oriented coursemark dialect to a constrained
//! HTML subset, the representation that gets stored and published.
//!
//! # Element Mapping Table
//!
//! | Dialect                 | HTML                                   | Notes                                    |
//! |-------------------------|----------------------------------------|------------------------------------------|
//! | `# ` .. `#### `         | `<h1>` .. `<h4>`                       | 5+ hashes fall through to paragraph      |
//! | `> text`                | `<blockquote>`                         | single line, no lazy continuation        |
//! | `- item`                | `<ul><li>`                             | nesting from leading spaces / 2          |
//! | `1. item`               | `<ol><li>`                             | any digit run, 1-based on deparse        |
//! | ``` fence lines         | `<pre><code>`                          | contents escaped verbatim, never parsed  |
//! | blank line              | closes all open lists                  |                                          |
//! | anything else           | `<p>`                                  | the default rule                         |
//! | `**b**`                 | `<strong>`                             |                                          |
//! | `_i_`                   | `<em>`                                 |                                          |
//! | `~~s~~`                 | `<s>`                                  |                                          |
//! | `` `c` ``               | `<code>`                               | extracted before bold/italic/strike      |
//! | `[label](url)`          | `<a target="_blank" rel="noopener noreferrer">` | http(s) URLs only, else literal |
//! | `![alt](url)`           | `<img loading="lazy" style="...">`     | http(s) URLs only, else literal          |
//!
//! # Processing model
//!
//! A single top-to-bottom pass over lines with two pieces of carried state: a
//! code-fence flag and a stack of open lists. Inline formatting runs as an
//! ordered pipeline of substitution stages over typed spans (see
//! [`inline`]); ordering is the contract — images and links are substituted
//! before escaping so their URLs survive, code spans are extracted before
//! emphasis so their contents are never reinterpreted.
//!
//! # Degradation
//!
//! The renderer is total. Malformed markup never errors: odd indentation
//! collapses to the nearest list depth, a non-http URL leaves the bracket
//! syntax as literal text, an unterminated fence is closed at end of input.

pub mod escape;
pub mod inline;
pub mod render;

pub use render::{to_html, to_html_with_options, RenderOptions};

use crate::convert::Converter;
use std::collections::HashMap;

/// Converter producing HTML from coursemark dialect text
#[derive(Default)]
pub struct HtmlConverter {
    options: RenderOptions,
}

impl HtmlConverter {
    /// Create a converter with explicit render options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Converter for HtmlConverter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Rendered HTML for publishing"
    }

    fn source_extensions(&self) -> &[&str] {
        &["txt", "cm"]
    }

    fn convert(&self, source: &str) -> String {
        render::to_html_with_options(source, &self.options)
    }

    fn convert_with_options(&self, source: &str, options: &HashMap<String, String>) -> String {
        let mut render_options = self.options.clone();
        if let Some(lazy) = options.get("lazy-images") {
            render_options.lazy_images = lazy != "false";
        }
        if let Some(style) = options.get("image-style") {
            render_options.image_style = style.clone();
        }
        render::to_html_with_options(source, &render_options)
    }
}
