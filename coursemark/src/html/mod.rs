//! Reverse direction: HTML -> coursemark dialect
//!
//! This module reconstructs editable dialect text from stored HTML. It is the
//! inverse of [`crate::markup`] over the constrained tag vocabulary; HTML
//! outside that vocabulary is tolerated, not rejected.
//!
//! # Element Mapping Table
//!
//! | HTML                    | Dialect                                | Notes                                     |
//! |-------------------------|----------------------------------------|-------------------------------------------|
//! | `<h1>` .. `<h4>`        | `# ` .. `#### `                        | block, followed by a blank line           |
//! | `<p>`                   | bare text                              | block, followed by a blank line           |
//! | `<strong>`              | `**..**`                               | inline                                    |
//! | `<em>`                  | `_.._`                                 | inline                                    |
//! | `<s>`                   | `~~..~~`                               | inline                                    |
//! | `<code>` under `<pre>`  | ``` fence                              | raw text content, one trailing \n dropped |
//! | `<code>` elsewhere      | `` `..` ``                             | raw text content                          |
//! | `<blockquote>`          | `> `                                   | block, followed by a blank line           |
//! | `<ul>` / `<ol>`         | `- ` / `1. ` items                     | two spaces of indent per nesting level    |
//! | `<img>`                 | `![alt](src)`                          | attributes verbatim, missing means empty  |
//! | `<a>`                   | `[..](href)`                           | label is the recursive content            |
//! | `<br>`                  | a single newline                       |                                           |
//! | anything else           | unwrapped                              | content kept, tag semantics dropped       |
//!
//! # Processing model
//!
//! Parse with html5ever into an rcdom tree, locate `<body>`, then a
//! depth-first visitor over a `NodeKind` tagged union with an indent
//! accumulator threaded through the recursion. Text nodes emit their
//! literal content (entities already decoded by the parser). The final
//! result is trimmed.

pub mod deparse;

pub use deparse::to_text;

use crate::convert::Converter;

/// Converter producing coursemark dialect text from HTML
pub struct MarkupConverter;

impl Converter for MarkupConverter {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Editable coursemark dialect text"
    }

    fn source_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn convert(&self, source: &str) -> String {
        deparse::to_text(source)
    }
}
