//! HTML to dialect text via an rcdom visitor
//!
//! The walk dispatches on [`NodeKind`], a tagged classification of the
//! element names the dialect knows how to express. Everything else is
//! `Passthrough`: children are visited, the tag itself vanishes.

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, Attribute};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;

/// Reconstruct dialect text from an HTML string
pub fn to_text(html: &str) -> String {
    let dom = parse_html(html);
    let mut out = String::new();
    if let Some(body) = find_body(&dom.document) {
        walk_children(&body, &mut out, 0);
    }
    out.trim().to_string()
}

fn parse_html(html: &str) -> RcDom {
    let parse_options = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    // Reading from an in-memory slice cannot fail; the fallback keeps the
    // function total regardless.
    parse_document(RcDom::default(), parse_options)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_default()
}

/// html5ever always synthesizes html/head/body, even for fragments, so the
/// search is expected to succeed.
fn find_body(node: &Handle) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = node.data {
        if name.local.as_ref() == "body" {
            return Some(node.clone());
        }
    }
    for child in node.children.borrow().iter() {
        if let Some(body) = find_body(child) {
            return Some(body);
        }
    }
    None
}

/// The element vocabulary the dialect can express
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Heading(usize),
    Paragraph,
    Emphasis(EmphasisKind),
    Code,
    Blockquote,
    List(ListKind),
    ListItem,
    Image,
    Anchor,
    Preformatted,
    LineBreak,
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmphasisKind {
    Bold,
    Italic,
    Strike,
}

impl EmphasisKind {
    fn marker(self) -> &'static str {
        match self {
            EmphasisKind::Bold => "**",
            EmphasisKind::Italic => "_",
            EmphasisKind::Strike => "~~",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

fn classify(name: &str) -> NodeKind {
    match name {
        "h1" => NodeKind::Heading(1),
        "h2" => NodeKind::Heading(2),
        "h3" => NodeKind::Heading(3),
        "h4" => NodeKind::Heading(4),
        "p" => NodeKind::Paragraph,
        "strong" => NodeKind::Emphasis(EmphasisKind::Bold),
        "em" => NodeKind::Emphasis(EmphasisKind::Italic),
        "s" => NodeKind::Emphasis(EmphasisKind::Strike),
        "code" => NodeKind::Code,
        "blockquote" => NodeKind::Blockquote,
        "ul" => NodeKind::List(ListKind::Unordered),
        "ol" => NodeKind::List(ListKind::Ordered),
        "li" => NodeKind::ListItem,
        "img" => NodeKind::Image,
        "a" => NodeKind::Anchor,
        "pre" => NodeKind::Preformatted,
        "br" => NodeKind::LineBreak,
        _ => NodeKind::Passthrough,
    }
}

fn walk_children(node: &Handle, out: &mut String, indent: usize) {
    for child in node.children.borrow().iter() {
        visit(child, out, indent);
    }
}

fn visit(node: &Handle, out: &mut String, indent: usize) {
    match node.data {
        // Entities are already decoded by the parser; emit literally.
        NodeData::Text { ref contents } => out.push_str(&contents.borrow()),
        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            match classify(name.local.as_ref()) {
                NodeKind::Heading(level) => {
                    for _ in 0..level {
                        out.push('#');
                    }
                    out.push(' ');
                    walk_children(node, out, indent);
                    out.push_str("\n\n");
                }
                NodeKind::Paragraph => {
                    walk_children(node, out, indent);
                    out.push_str("\n\n");
                }
                NodeKind::Emphasis(kind) => {
                    out.push_str(kind.marker());
                    walk_children(node, out, indent);
                    out.push_str(kind.marker());
                }
                NodeKind::Code => {
                    if parent_is_pre(node) {
                        let mut content = text_content(node);
                        // The renderer appends a newline after every fenced
                        // line; dropping one here keeps fences from growing
                        // a blank line per round trip.
                        if content.ends_with('\n') {
                            content.pop();
                        }
                        out.push_str("```\n");
                        out.push_str(&content);
                        out.push_str("\n```\n\n");
                    } else {
                        out.push('`');
                        out.push_str(&text_content(node));
                        out.push('`');
                    }
                }
                NodeKind::Blockquote => {
                    out.push_str("> ");
                    walk_children(node, out, indent);
                    out.push_str("\n\n");
                }
                NodeKind::List(kind) => visit_list(node, out, indent, kind),
                // A stray li outside ul/ol still delegates to its children.
                NodeKind::ListItem => walk_children(node, out, indent + 2),
                NodeKind::Image => {
                    let src = get_attr(attrs, "src").unwrap_or_default();
                    let alt = get_attr(attrs, "alt").unwrap_or_default();
                    out.push_str(&format!("![{alt}]({src})"));
                }
                NodeKind::Anchor => {
                    let href = get_attr(attrs, "href").unwrap_or_default();
                    out.push('[');
                    walk_children(node, out, indent);
                    out.push_str(&format!("]({href})"));
                }
                NodeKind::Preformatted => walk_children(node, out, indent),
                NodeKind::LineBreak => out.push('\n'),
                NodeKind::Passthrough => walk_children(node, out, indent),
            }
        }
        _ => walk_children(node, out, indent),
    }
}

/// Emit one line per direct `<li>` child, two extra spaces of indent for
/// whatever nests inside the item.
///
/// A nested list starts on a fresh line inside its parent item and skips the
/// trailing blank line, so the emitted text reparses to the same structure.
fn visit_list(node: &Handle, out: &mut String, indent: usize, kind: ListKind) {
    let nested = indent > 0;
    if nested && !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }

    let mut counter = 0usize;
    for child in node.children.borrow().iter() {
        let is_item = matches!(
            child.data,
            NodeData::Element { ref name, .. } if name.local.as_ref() == "li"
        );
        if !is_item {
            continue;
        }
        counter += 1;
        for _ in 0..indent {
            out.push(' ');
        }
        match kind {
            ListKind::Unordered => out.push_str("- "),
            ListKind::Ordered => out.push_str(&format!("{counter}. ")),
        }
        walk_children(child, out, indent + 2);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    if !nested {
        out.push('\n');
    }
}

fn parent_is_pre(node: &Handle) -> bool {
    let weak = node.parent.take();
    let result = weak
        .as_ref()
        .and_then(|parent| parent.upgrade())
        .map(|parent| {
            matches!(
                parent.data,
                NodeData::Element { ref name, .. } if name.local.as_ref() == "pre"
            )
        })
        .unwrap_or(false);
    node.parent.set(weak);
    result
}

/// Concatenated text of all descendant text nodes
fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

fn get_attr(attrs: &RefCell<Vec<Attribute>>, name: &str) -> Option<String> {
    attrs
        .borrow()
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}
