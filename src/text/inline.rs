//! Inline content tree
//!
//! Block content is a sanitized inline markup fragment. Caret offsets are
//! linear positions counted in visible characters, ignoring markup tags.
//! This module parses fragments into an abstract tree of text leaves and
//! inline element nodes, and implements the pure tree walks the editing
//! engine and the host's caret placement rely on: measure, locate, split,
//! serialize.
//!
//! Parsing uses quick-xml over the sanitized-HTML dialect contenteditable
//! actually emits: HTML void elements may appear bare (`<br>` as well as
//! `<br/>`) and named HTML entities (`&nbsp;`) are resolved. Anything that
//! still fails to parse is treated as a single opaque text leaf, so no
//! input can make these functions fail.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node in an inline content tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineNode {
    /// A run of visible text
    Text { text: String },

    /// An inline element (b, i, em, strong, a, span, br, ...)
    Span {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Visible character count of this node's subtree
    pub fn visible_len(&self) -> usize {
        match self {
            InlineNode::Text { text } => text.chars().count(),
            InlineNode::Span { children, .. } => visible_len(children),
        }
    }
}

/// Location of a caret inside an inline tree: the child-index path to a
/// text leaf plus a character offset within that leaf.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct CaretLocation {
    pub path: Vec<usize>,
    pub offset: usize,
}

#[derive(Error, Debug)]
enum FragmentError {
    #[error("malformed inline markup: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unbalanced inline markup")]
    Unbalanced,
}

/// HTML void elements: never hold children and may appear without a
/// closing slash in serialized editor content.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Parse an inline markup fragment into a tree.
///
/// Never fails: a fragment that is not well-formed degrades to a single
/// text leaf holding the raw string, which keeps every downstream walk
/// total at the cost of dropping formatting for that block.
pub fn parse_fragment(html: &str) -> Vec<InlineNode> {
    if html.is_empty() {
        return Vec::new();
    }
    match try_parse(html) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::debug!("inline fragment fell back to plain text: {}", e);
            vec![InlineNode::Text {
                text: html.to_string(),
            }]
        }
    }
}

fn try_parse(html: &str) -> Result<Vec<InlineNode>, FragmentError> {
    let mut reader = Reader::from_str(html);
    // A bare void element never closes, so end names are matched against
    // our own element stack rather than the reader's.
    reader.check_end_names(false);

    // Stack of open elements; the bottom entry collects root-level nodes.
    let mut stack: Vec<(String, Vec<(String, String)>, Vec<InlineNode>)> =
        vec![(String::new(), Vec::new(), Vec::new())];

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let attrs = read_attrs(&e)?;
                if is_void(&tag) {
                    let top = stack.last_mut().expect("root frame always present");
                    top.2.push(InlineNode::Span {
                        tag,
                        attrs,
                        children: Vec::new(),
                    });
                } else {
                    stack.push((tag, attrs, Vec::new()));
                }
            }
            Event::Empty(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let attrs = read_attrs(&e)?;
                let top = stack.last_mut().expect("root frame always present");
                top.2.push(InlineNode::Span {
                    tag,
                    attrs,
                    children: Vec::new(),
                });
            }
            Event::End(e) => {
                if stack.len() < 2 {
                    return Err(FragmentError::Unbalanced);
                }
                let (tag, attrs, children) = stack.pop().expect("stack is non-empty");
                if tag.as_bytes() != e.name().as_ref() {
                    return Err(FragmentError::Unbalanced);
                }
                let top = stack.last_mut().expect("root frame always present");
                top.2.push(InlineNode::Span {
                    tag,
                    attrs,
                    children,
                });
            }
            Event::Text(t) => {
                let text = t.unescape()?.into_owned();
                if !text.is_empty() {
                    let top = stack.last_mut().expect("root frame always present");
                    top.2.push(InlineNode::Text { text });
                }
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c).into_owned();
                let top = stack.last_mut().expect("root frame always present");
                top.2.push(InlineNode::Text { text });
            }
            Event::Eof => break,
            // Declarations, comments and processing instructions carry no
            // visible content
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(FragmentError::Unbalanced);
    }
    Ok(stack.pop().expect("root frame always present").2)
}

fn read_attrs(e: &quick_xml::events::BytesStart) -> Result<Vec<(String, String)>, FragmentError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| FragmentError::Xml(e.into()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(FragmentError::Xml)?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}

/// Total visible character count of a tree, markup-transparent
pub fn visible_len(nodes: &[InlineNode]) -> usize {
    nodes.iter().map(|n| n.visible_len()).sum()
}

/// Find the text leaf containing a linear caret offset.
///
/// Text leaves are walked in document order; offsets accumulate across
/// inline element boundaries transparently. An offset past the end clamps
/// to the last text boundary (or the tree root when there is no text).
pub fn locate(nodes: &[InlineNode], offset: usize) -> CaretLocation {
    let mut remaining = offset;
    let mut last_boundary = CaretLocation::default();
    match locate_walk(nodes, &mut remaining, &mut Vec::new(), &mut last_boundary) {
        Some(found) => found,
        None => last_boundary,
    }
}

fn locate_walk(
    nodes: &[InlineNode],
    remaining: &mut usize,
    path: &mut Vec<usize>,
    last_boundary: &mut CaretLocation,
) -> Option<CaretLocation> {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        match node {
            InlineNode::Text { text } => {
                let len = text.chars().count();
                if *remaining <= len {
                    let found = CaretLocation {
                        path: path.clone(),
                        offset: *remaining,
                    };
                    path.pop();
                    return Some(found);
                }
                *remaining -= len;
                *last_boundary = CaretLocation {
                    path: path.clone(),
                    offset: len,
                };
            }
            InlineNode::Span { children, .. } => {
                if let Some(found) = locate_walk(children, remaining, path, last_boundary) {
                    path.pop();
                    return Some(found);
                }
            }
        }
        path.pop();
    }
    None
}

/// Partition a tree at a visible-character offset into `(before, after)`.
///
/// The partition is lossless: an inline element straddling the offset is
/// closed on the left side and reopened with the same tag and attributes
/// on the right, so serializing both halves and concatenating them
/// preserves the visible text and its per-character formatting.
pub fn split_at(nodes: &[InlineNode], offset: usize) -> (Vec<InlineNode>, Vec<InlineNode>) {
    let mut remaining = offset;
    split_walk(nodes, &mut remaining)
}

fn split_walk(nodes: &[InlineNode], remaining: &mut usize) -> (Vec<InlineNode>, Vec<InlineNode>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for node in nodes {
        if *remaining == 0 {
            right.push(node.clone());
            continue;
        }
        let len = node.visible_len();
        if len <= *remaining {
            *remaining -= len;
            left.push(node.clone());
            continue;
        }
        // The split point falls inside this node
        match node {
            InlineNode::Text { text } => {
                let head: String = text.chars().take(*remaining).collect();
                let tail: String = text.chars().skip(*remaining).collect();
                *remaining = 0;
                left.push(InlineNode::Text { text: head });
                right.push(InlineNode::Text { text: tail });
            }
            InlineNode::Span {
                tag,
                attrs,
                children,
            } => {
                let (l, r) = split_walk(children, remaining);
                left.push(InlineNode::Span {
                    tag: tag.clone(),
                    attrs: attrs.clone(),
                    children: l,
                });
                right.push(InlineNode::Span {
                    tag: tag.clone(),
                    attrs: attrs.clone(),
                    children: r,
                });
            }
        }
    }

    (left, right)
}

/// Serialize a tree back to an inline markup fragment
pub fn to_html(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text { text } => out.push_str(&escape(text)),
            InlineNode::Span {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attrs {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    write_nodes(children, out);
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
        }
    }
}

/// Visible character count of a raw fragment string
pub fn fragment_len(html: &str) -> usize {
    visible_len(&parse_fragment(html))
}
