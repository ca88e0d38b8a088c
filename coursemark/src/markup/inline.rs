//! Inline formatting as an ordered span pipeline
//!
//! Inline runs are produced by ordered substitution, not by building a token
//! tree. The ordering is load-bearing:
//!
//! 1. image substitution (before escaping, so raw URLs survive)
//! 2. link substitution (after images — `![..](..)` must not read as a link)
//! 3. HTML escaping of the remaining text
//! 4. inline code extraction (code spans become opaque to later stages)
//! 5. bold, italic, strikethrough
//!
//! Each stage operates on a sequence of typed spans: `Text` is still subject
//! to later stages, `Tag` is finished HTML that no later stage may rewrite.
//! This is what keeps emitted tags from being escaped twice and code span
//! contents from being reinterpreted as emphasis.

use super::escape::escape_html;
use super::render::RenderOptions;

/// A run of output under construction
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Span {
    /// Literal text, still subject to escaping and later stages
    Text(String),
    /// Already-rendered HTML, opaque to later stages
    Tag(String),
}

/// Apply the full inline pipeline to a single line's content
pub(crate) fn render_inline(text: &str, options: &RenderOptions) -> String {
    let mut spans = vec![Span::Text(text.to_string())];
    spans = substitute_images(spans, options);
    spans = substitute_links(spans);
    spans = escape_text(spans);
    spans = substitute_code(spans);
    spans = substitute_emphasis(spans, "**", "strong");
    spans = substitute_emphasis(spans, "_", "em");
    spans = substitute_emphasis(spans, "~~", "s");

    let mut out = String::new();
    for span in spans {
        match span {
            Span::Text(text) | Span::Tag(text) => out.push_str(&text),
        }
    }
    out
}

/// Run a rewriter over every text span, passing tag spans through untouched
fn map_text_spans<F>(spans: Vec<Span>, mut rewrite: F) -> Vec<Span>
where
    F: FnMut(&str, &mut Vec<Span>),
{
    let mut out = Vec::new();
    for span in spans {
        match span {
            Span::Text(text) => rewrite(&text, &mut out),
            tag => out.push(tag),
        }
    }
    out
}

fn flush(out: &mut Vec<Span>, literal: &mut String) {
    if !literal.is_empty() {
        out.push(Span::Text(std::mem::take(literal)));
    }
}

/// Parse `[label](url)` at the start of `s`.
///
/// The label may not contain `]`; the URL may not contain whitespace or `)`
/// and must start with `http://` or `https://`. Returns the label, the URL
/// and the total byte length consumed.
fn bracket_target(s: &str, allow_empty_label: bool) -> Option<(&str, &str, usize)> {
    let rest = s.strip_prefix('[')?;
    let close = rest.find(']')?;
    let label = &rest[..close];
    if label.is_empty() && !allow_empty_label {
        return None;
    }
    let after = rest[close + 1..].strip_prefix('(')?;
    let paren = after.find(')')?;
    let url = &after[..paren];
    if url.is_empty() || url.chars().any(char::is_whitespace) {
        return None;
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return None;
    }
    // "[" + label + "](" + url + ")"
    Some((label, url, close + paren + 4))
}

fn image_tag(alt: &str, url: &str, options: &RenderOptions) -> String {
    let mut tag = format!(r#"<img src="{url}" alt="{}""#, escape_html(alt));
    if options.lazy_images {
        tag.push_str(r#" loading="lazy""#);
    }
    tag.push_str(&format!(r#" style="{}">"#, options.image_style));
    tag
}

/// `![alt](url)` -> `<img>`. Runs before escaping so the URL stays raw; the
/// alt text is escaped here because it lands inside the tag span.
fn substitute_images(spans: Vec<Span>, options: &RenderOptions) -> Vec<Span> {
    map_text_spans(spans, |text, out| {
        let mut rest = text;
        let mut literal = String::new();
        while let Some(bang) = rest.find("![") {
            let (before, candidate) = rest.split_at(bang);
            literal.push_str(before);
            match bracket_target(&candidate[1..], true) {
                Some((alt, url, len)) => {
                    flush(out, &mut literal);
                    out.push(Span::Tag(image_tag(alt, url, options)));
                    rest = &candidate[1 + len..];
                }
                None => {
                    // not an image; keep the bang and rescan from the bracket
                    literal.push('!');
                    rest = &candidate[1..];
                }
            }
        }
        literal.push_str(rest);
        flush(out, &mut literal);
    })
}

/// `[label](url)` -> `<a>`. The label stays a text span so it is escaped
/// exactly once and may itself carry emphasis.
fn substitute_links(spans: Vec<Span>) -> Vec<Span> {
    map_text_spans(spans, |text, out| {
        let mut rest = text;
        let mut literal = String::new();
        while let Some(open) = rest.find('[') {
            let (before, candidate) = rest.split_at(open);
            literal.push_str(before);
            match bracket_target(candidate, false) {
                Some((label, url, len)) => {
                    flush(out, &mut literal);
                    out.push(Span::Tag(format!(
                        r#"<a href="{url}" target="_blank" rel="noopener noreferrer">"#
                    )));
                    out.push(Span::Text(label.to_string()));
                    out.push(Span::Tag("</a>".to_string()));
                    rest = &candidate[len..];
                }
                None => {
                    literal.push('[');
                    rest = &candidate[1..];
                }
            }
        }
        literal.push_str(rest);
        flush(out, &mut literal);
    })
}

fn escape_text(spans: Vec<Span>) -> Vec<Span> {
    spans
        .into_iter()
        .map(|span| match span {
            Span::Text(text) => Span::Text(escape_html(&text)),
            tag => tag,
        })
        .collect()
}

/// `` `code` `` -> `<code>`. The whole span becomes a tag span, so emphasis
/// stages never see its contents.
fn substitute_code(spans: Vec<Span>) -> Vec<Span> {
    map_text_spans(spans, |text, out| {
        let mut rest = text;
        let mut literal = String::new();
        while let Some(open) = rest.find('`') {
            let after = &rest[open + 1..];
            match after.find('`') {
                Some(close) if close > 0 => {
                    literal.push_str(&rest[..open]);
                    flush(out, &mut literal);
                    out.push(Span::Tag(format!("<code>{}</code>", &after[..close])));
                    rest = &after[close + 1..];
                }
                _ => {
                    // unpaired or empty pair: the backtick stays literal
                    literal.push_str(&rest[..=open]);
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        flush(out, &mut literal);
    })
}

/// Wrap non-greedy `delim ... delim` runs in `<tag>`. The inner content is
/// re-emitted as a text span so later emphasis stages still apply inside.
fn substitute_emphasis(spans: Vec<Span>, delim: &str, tag: &str) -> Vec<Span> {
    map_text_spans(spans, |text, out| {
        let mut rest = text;
        let mut literal = String::new();
        while let Some(open) = rest.find(delim) {
            let after = &rest[open + delim.len()..];
            match after.find(delim) {
                Some(close) if close > 0 => {
                    literal.push_str(&rest[..open]);
                    flush(out, &mut literal);
                    out.push(Span::Tag(format!("<{tag}>")));
                    out.push(Span::Text(after[..close].to_string()));
                    out.push(Span::Tag(format!("</{tag}>")));
                    rest = &after[close + delim.len()..];
                }
                _ => {
                    // no closing delimiter with content: leave it literal
                    literal.push_str(&rest[..open + delim.len()]);
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        flush(out, &mut literal);
    })
}
