//! Block-level rendering loop
//!
//! A single top-to-bottom pass over input lines. Two pieces of state carry
//! across lines: a code-fence flag and the stack of open lists. Everything
//! else is decided per line, first match wins: fence toggle, heading,
//! blockquote, list item, blank line, paragraph.
//!
//! Blocks are emitted back to back with no separators; the whole document is
//! one concatenated string.

use super::escape::escape_html;
use super::inline::render_inline;
use serde::{Deserialize, Serialize};

/// Options controlling the rendered HTML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Emit `loading="lazy"` on images
    pub lazy_images: bool,
    /// Inline style attribute attached to every image
    pub image_style: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            lazy_images: true,
            image_style: "max-width:100%;border-radius:8px;margin:8px 0;".to_string(),
        }
    }
}

/// Render markup to HTML with default options
pub fn to_html(text: &str) -> String {
    to_html_with_options(text, &RenderOptions::default())
}

/// Render markup to HTML
pub fn to_html_with_options(text: &str, options: &RenderOptions) -> String {
    let mut out = String::new();
    let mut lists = ListStack::default();
    let mut in_code_block = false;

    for line in text.lines() {
        // Fences toggle on the raw line; inside a fence nothing else applies.
        if line.starts_with("```") {
            in_code_block = !in_code_block;
            out.push_str(if in_code_block {
                "<pre><code>"
            } else {
                "</code></pre>"
            });
            continue;
        }
        if in_code_block {
            out.push_str(&escape_html(line));
            out.push('\n');
            continue;
        }

        let trimmed = line.trim();
        if let Some((level, rest)) = match_heading(trimmed) {
            lists.close_all(&mut out);
            out.push_str(&format!(
                "<h{level}>{}</h{level}>",
                render_inline(rest, options)
            ));
        } else if let Some(rest) = trimmed.strip_prefix("> ") {
            lists.close_all(&mut out);
            out.push_str(&format!(
                "<blockquote>{}</blockquote>",
                render_inline(rest, options)
            ));
        } else if let Some((depth, kind, content)) = match_list_item(line) {
            lists.push_item(kind, depth, &mut out);
            out.push_str(&render_inline(content, options));
        } else if trimmed.is_empty() {
            lists.close_all(&mut out);
        } else {
            lists.close_all(&mut out);
            out.push_str(&format!("<p>{}</p>", render_inline(trimmed, options)));
        }
    }

    // Unterminated fences close at end of input so the output stays
    // well-formed.
    if in_code_block {
        out.push_str("</code></pre>");
    }
    lists.close_all(&mut out);
    out
}

/// `#` to `####` followed by a space. Five or more hashes are not a heading.
fn match_heading(trimmed: &str) -> Option<(usize, &str)> {
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if (1..=4).contains(&hashes) {
        if let Some(rest) = trimmed[hashes..].strip_prefix(' ') {
            return Some((hashes, rest));
        }
    }
    None
}

/// Leading whitespace + `- ` or `digits. ` + non-empty content.
///
/// Depth is computed from the raw line: floor(leading whitespace / 2), so
/// odd indentation collapses to the nearest level.
fn match_list_item(line: &str) -> Option<(usize, ListKind, &str)> {
    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
    let depth = leading / 2;
    let rest = line.trim_start();

    if let Some(content) = rest.strip_prefix("- ") {
        if !content.is_empty() {
            return Some((depth, ListKind::Unordered, content));
        }
        return None;
    }

    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(content) = rest[digits..].strip_prefix(". ") {
            if !content.is_empty() {
                return Some((depth, ListKind::Ordered, content));
            }
        }
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// One open list and whether its current `<li>` is still open.
struct OpenList {
    kind: ListKind,
    item_open: bool,
}

/// Stack of open lists, one entry per nesting level.
///
/// `</li>` is deferred until the item's fate is known: a deeper list line
/// nests inside the still-open item, a sibling or shallower line closes it.
#[derive(Default)]
struct ListStack {
    open: Vec<OpenList>,
}

impl ListStack {
    fn close_top(&mut self, out: &mut String) {
        if let Some(list) = self.open.pop() {
            if list.item_open {
                out.push_str("</li>");
            }
            out.push_str(list.kind.close_tag());
        }
    }

    fn close_all(&mut self, out: &mut String) {
        while !self.open.is_empty() {
            self.close_top(out);
        }
    }

    /// Reconcile the stack to `depth`, then open the item's `<li>`.
    ///
    /// A line at depth `d` wants `d + 1` open lists. Deeper lists are closed;
    /// at equal depth the previous sibling item is closed; when shallower,
    /// exactly one new list opens, so depth jumps collapse toward the nearest
    /// level. A kind change at equal depth joins the list already open there.
    fn push_item(&mut self, kind: ListKind, depth: usize, out: &mut String) {
        let target = depth + 1;
        while self.open.len() > target {
            self.close_top(out);
        }
        if self.open.len() == target {
            let top = self.open.last_mut().unwrap();
            if top.item_open {
                out.push_str("</li>");
                top.item_open = false;
            }
        } else {
            out.push_str(kind.open_tag());
            self.open.push(OpenList {
                kind,
                item_open: false,
            });
        }
        out.push_str("<li>");
        self.open.last_mut().unwrap().item_open = true;
    }
}
