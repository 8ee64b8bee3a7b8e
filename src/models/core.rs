//! Core data structures for the resume editor
//!
//! This module defines the Section/Block document tree that is the
//! single source of truth for everything the editor renders or prints.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub use super::block_type::BlockType;

// Process-wide id counter shared by sections and blocks. Ids are never reused.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn mint_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", prefix, n)
}

/// The atomic editable unit: a typed run of sanitized inline markup.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Block {
    /// Stable, process-unique identifier
    pub id: String,

    /// Semantic kind of this block (paragraph, heading, list item)
    #[serde(rename = "type")]
    pub block_type: BlockType,

    /// Inline markup fragment; never contains block-level tags
    pub content: String,
}

impl Block {
    /// Create a new block with a freshly minted id
    pub fn new(content: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: mint_id("block"),
            block_type,
            content: content.into(),
        }
    }

    /// Create an empty paragraph block (the default for new content)
    pub fn empty_paragraph() -> Self {
        Self::new("", BlockType::P)
    }
}

/// An ordered, independently visible group of blocks.
///
/// A section always holds at least one block; `Document::remove_block`
/// enforces this by refusing to remove the last one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Section {
    /// Stable, process-unique identifier
    pub id: String,

    /// Whether this section participates in preview/export output
    pub visible: bool,

    /// Blocks in rendering order
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a visible section seeded with one empty paragraph
    pub fn new() -> Self {
        Self {
            id: mint_id("section"),
            visible: true,
            blocks: vec![Block::empty_paragraph()],
        }
    }

    /// Create a section with explicit blocks (used by seeding and tests)
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        debug_assert!(!blocks.is_empty(), "a section must hold at least one block");
        Self {
            id: mint_id("section"),
            visible: true,
            blocks,
        }
    }

    /// Index of a block within this section
    pub fn block_index(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    /// Look up a block by id
    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == block_id)
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// The document: an ordered sequence of sections.
///
/// The document exclusively owns all sections and blocks. Every mutation
/// goes through the operations below; all of them are synchronous, total,
/// and degrade to no-ops when a referenced id no longer exists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the starter document shown on first load: a greeting section
    /// and a work-history section.
    pub fn seed() -> Self {
        Self {
            sections: vec![
                Section::with_blocks(vec![
                    Block::new("Hello, I am a software engineer.", BlockType::P),
                    Block::new("Nice to meet you.", BlockType::P),
                ]),
                Section::with_blocks(vec![
                    Block::new("Work Experience", BlockType::H2),
                    Block::new("Company A", BlockType::P),
                    Block::new("Company B", BlockType::P),
                ]),
            ],
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up a section by id
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    /// Look up a block within a section
    pub fn block(&self, section_id: &str, block_id: &str) -> Option<&Block> {
        self.section(section_id).and_then(|s| s.block(block_id))
    }

    /// Sections currently included in preview/export output
    pub fn visible_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.visible)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new section holding one empty paragraph; returns its id
    pub fn add_section(&mut self) -> String {
        let section = Section::new();
        let id = section.id.clone();
        self.sections.push(section);
        id
    }

    /// Delete a section and all its blocks; no-op if not found
    pub fn remove_section(&mut self, section_id: &str) {
        self.sections.retain(|s| s.id != section_id);
    }

    /// Flip a section's visibility flag; no-op if not found
    pub fn toggle_visible(&mut self, section_id: &str) {
        if let Some(section) = self.section_mut(section_id) {
            section.visible = !section.visible;
        }
    }

    /// Move the section at `from` to `to`, shifting the sections between.
    /// Out-of-range indices leave the document untouched.
    pub fn reorder_sections(&mut self, from: usize, to: usize) {
        reorder(&mut self.sections, from, to);
    }

    /// Replace a block's content in place; no-op if not found
    pub fn update_block(&mut self, section_id: &str, block_id: &str, content: &str) {
        if let Some(block) = self.block_mut(section_id, block_id) {
            block.content = content.to_string();
        }
    }

    /// Replace a block's type in place. Content is kept verbatim; it is the
    /// caller's job to re-sanitize if the new type demands it.
    pub fn change_block_type(&mut self, section_id: &str, block_id: &str, block_type: BlockType) {
        if let Some(block) = self.block_mut(section_id, block_id) {
            block.block_type = block_type;
        }
    }

    /// Reorder blocks within one section, same semantics as section reorder
    pub fn reorder_blocks(&mut self, section_id: &str, from: usize, to: usize) {
        if let Some(section) = self.section_mut(section_id) {
            reorder(&mut section.blocks, from, to);
        }
    }

    /// Remove a block unless it is the section's only remaining one.
    /// A section with zero blocks is never a legal state.
    pub fn remove_block(&mut self, section_id: &str, block_id: &str) {
        if let Some(section) = self.section_mut(section_id) {
            if section.blocks.len() > 1 {
                section.blocks.retain(|b| b.id != block_id);
            }
        }
    }

    /// Insert a block after the block at `index` in a section.
    /// Used by the editing engine's split operation.
    pub(crate) fn insert_block_after(&mut self, section_id: &str, index: usize, block: Block) {
        if let Some(section) = self.section_mut(section_id) {
            if index < section.blocks.len() {
                section.blocks.insert(index + 1, block);
            }
        }
    }

    pub(crate) fn block_mut(&mut self, section_id: &str, block_id: &str) -> Option<&mut Block> {
        self.section_mut(section_id)
            .and_then(|s| s.blocks.iter_mut().find(|b| b.id == block_id))
    }
}

/// Move `items[from]` to position `to`, shifting the elements between.
/// Rejects out-of-range indices without mutating.
fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
