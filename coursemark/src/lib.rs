//! Bidirectional conversion between the coursemark dialect and HTML
//!
//!     This crate is the conversion core of the coursemark toolchain: course
//!     authors write content in a small line-oriented plain-text dialect, while
//!     the published representation is a constrained HTML subset. Editing loads
//!     the stored HTML back into text, previewing renders the text to HTML on
//!     every change. Both directions live here.
//!
//!     TLDR:
//!         - to_html() renders dialect text to HTML in a single top-to-bottom
//!           pass over lines. No intermediate tree; inline formatting is an
//!           ordered pipeline of substitution stages over typed spans.
//!         - to_text() parses HTML with html5ever and walks the tree with an
//!           explicit visitor, reconstructing dialect text.
//!         - Both operations are total. Malformed markup degrades to
//!           paragraphs or literal text, unknown HTML tags are unwrapped.
//!           Neither returns an error.
//!
//! Architecture
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ConvertError (registry lookups only)
//!     ├── convert.rs          # Converter trait definition
//!     ├── registry.rs         # ConverterRegistry for discovery and selection
//!     ├── markup              # forward direction (text -> HTML)
//!     │   ├── escape.rs       # minimal HTML escaping contract
//!     │   ├── inline.rs       # span pipeline for inline formatting
//!     │   └── render.rs       # line loop, block dispatch, list stack
//!     ├── html                # reverse direction (HTML -> text)
//!     │   └── deparse.rs      # rcdom visitor over a NodeKind tagged union
//!     └── lib.rs
//!
//!     This is a pure lib: it powers the coursemark CLI but is shell agnostic,
//!     that is, no code here supposes a shell environment, be it std print,
//!     env vars etc. It performs no I/O beyond its string arguments.
//!
//! Grammar
//!
//!     Headings `# ` through `#### `, blockquotes `> `, unordered lists `- `,
//!     ordered lists `1. `, fenced code blocks delimited by ``` lines, and
//!     paragraphs as the default. Inline: `**bold**`, `_italic_`,
//!     `~~strike~~`, `` `code` ``, `[label](url)` links and `![alt](url)`
//!     images restricted to http(s) URLs. Nesting in lists comes from leading
//!     whitespace, two spaces per level.
//!
//! Library Choices
//!
//!     The forward direction is hand written: the dialect is small and its
//!     exact output (attribute sets, escaping behavior, degradation rules) is
//!     the contract, so delegating to a CommonMark engine would fight us on
//!     every corner case. The reverse direction offloads HTML parsing to
//!     html5ever + markup5ever_rcdom; hand-parsing HTML is a non starter and
//!     the stored documents may have been touched by other tools.

pub mod convert;
pub mod error;
pub mod html;
pub mod markup;
pub mod registry;

pub use convert::Converter;
pub use error::ConvertError;
pub use markup::render::RenderOptions;
pub use registry::ConverterRegistry;

/// Renders coursemark dialect text to HTML with the default options.
///
/// Total: never fails, whatever the input. See [`markup::render`] for the
/// grammar and degradation rules.
pub fn to_html(text: &str) -> String {
    markup::render::to_html(text)
}

/// Renders coursemark dialect text to HTML with explicit [`RenderOptions`].
pub fn to_html_with_options(text: &str, options: &RenderOptions) -> String {
    markup::render::to_html_with_options(text, options)
}

/// Reconstructs coursemark dialect text from HTML.
///
/// Total: tolerant of foreign tags (unwrapped) and malformed input. The
/// result re-renders to structurally equivalent HTML via [`to_html`].
pub fn to_text(html: &str) -> String {
    html::deparse::to_text(html)
}
