//! Preview projection
//!
//! Projects the document's visible sections into a display list the UI
//! renders verbatim, for both the live preview panel and the print
//! target. One semantic grouping rule applies: a maximal run of
//! consecutive list-item blocks becomes a single list container; every
//! other block renders standalone. Projection is a pure function of the
//! document, so identical state always yields a structurally identical
//! list.

use serde::{Deserialize, Serialize};

use crate::models::{Block, Document, Section};

/// Message shown when every section is hidden
pub const EMPTY_PREVIEW_MESSAGE: &str = "No visible sections.";

/// A renderable node within one section
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewNode {
    /// A standalone block element
    Block {
        block_id: String,
        /// HTML tag implied by the block type ("p", "h1", ...)
        tag: String,
        /// Inline markup, inserted as the element's inner content
        content: String,
    },

    /// A run of consecutive list items merged into one list container
    List { items: Vec<ListItem> },
}

/// One item inside a grouped list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ListItem {
    pub block_id: String,
    pub content: String,
}

/// A visible section projected for rendering
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewSection {
    pub section_id: String,
    pub nodes: Vec<PreviewNode>,
}

/// The complete display tree for preview and print.
///
/// `placeholder` is set (and `sections` empty) exactly when no section
/// is visible, so the UI renders a message instead of an empty page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PreviewList {
    pub sections: Vec<PreviewSection>,
    pub placeholder: Option<String>,
}

/// Project a document into its display tree
pub fn project(doc: &Document) -> PreviewList {
    let sections: Vec<PreviewSection> = doc.visible_sections().map(project_section).collect();

    if sections.is_empty() {
        PreviewList {
            sections,
            placeholder: Some(EMPTY_PREVIEW_MESSAGE.to_string()),
        }
    } else {
        PreviewList {
            sections,
            placeholder: None,
        }
    }
}

fn project_section(section: &Section) -> PreviewSection {
    PreviewSection {
        section_id: section.id.clone(),
        nodes: group_blocks(&section.blocks),
    }
}

/// Apply the grouping rule to an ordered block sequence.
///
/// Runs of consecutive list items collapse into one `List` node; the run
/// resets whenever a non-list-item block interrupts it.
pub fn group_blocks(blocks: &[Block]) -> Vec<PreviewNode> {
    let mut nodes = Vec::new();
    let mut run: Vec<ListItem> = Vec::new();

    for block in blocks {
        if block.block_type.is_list_item() {
            run.push(ListItem {
                block_id: block.id.clone(),
                content: block.content.clone(),
            });
        } else {
            if !run.is_empty() {
                nodes.push(PreviewNode::List {
                    items: std::mem::take(&mut run),
                });
            }
            nodes.push(PreviewNode::Block {
                block_id: block.id.clone(),
                tag: block.block_type.tag().to_string(),
                content: block.content.clone(),
            });
        }
    }
    if !run.is_empty() {
        nodes.push(PreviewNode::List { items: run });
    }

    nodes
}

/// Serialize a display tree to the print-target markup.
///
/// Block content is sanitized inline markup and is inserted verbatim as
/// inner content; only structure is generated here.
pub fn to_html(list: &PreviewList) -> String {
    let mut out = String::new();

    if let Some(message) = &list.placeholder {
        out.push_str("<p class=\"preview-empty\">");
        out.push_str(message);
        out.push_str("</p>");
        return out;
    }

    for section in &list.sections {
        out.push_str(&format!(
            "<section data-section-id=\"{}\">",
            section.section_id
        ));
        for node in &section.nodes {
            match node {
                PreviewNode::Block {
                    block_id,
                    tag,
                    content,
                } => {
                    out.push_str(&format!(
                        "<{} data-block-id=\"{}\">{}</{}>",
                        tag, block_id, content, tag
                    ));
                }
                PreviewNode::List { items } => {
                    out.push_str("<ul>");
                    for item in items {
                        out.push_str(&format!(
                            "<li data-block-id=\"{}\">{}</li>",
                            item.block_id, item.content
                        ));
                    }
                    out.push_str("</ul>");
                }
            }
        }
        out.push_str("</section>");
    }

    out
}
