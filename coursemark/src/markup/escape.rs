//! Minimal HTML escaping
//!
//! The escaping contract is deliberately narrow: `&`, `<` and `>` only.
//! Quotes are left alone, so callers embedding the result in an attribute
//! value must handle their own quoting.

/// Escape HTML special characters in text content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
