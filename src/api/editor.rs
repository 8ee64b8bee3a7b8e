//! Editor handle: the JavaScript-facing document model and editing API
//!
//! The document lives inside a `ResumeEditor` handle constructed by the
//! host and passed wherever it is needed; all mutation funnels through
//! the methods below. There is no ambient global state.
//!
//! Mutations are total: a stale section or block id (a blur event firing
//! after the block was deleted, a drag settling after a concurrent
//! structural change) degrades to a no-op or a null result, never an
//! exception. Structural edits return caret-restoration data and are
//! fully applied to the model before the method returns, so the host can
//! immediately refocus against the post-edit rendered content.

use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::editing;
use crate::models::{BlockType, Document};
use crate::render;
use crate::wasm_error;
use crate::wasm_info;
use crate::wasm_log;
use crate::wasm_warn;

/// The editor: owns the canonical document tree.
#[wasm_bindgen]
pub struct ResumeEditor {
    doc: Document,
}

#[wasm_bindgen]
impl ResumeEditor {
    /// Create an editor over an empty document
    #[wasm_bindgen(constructor)]
    pub fn new() -> ResumeEditor {
        ResumeEditor {
            doc: Document::new(),
        }
    }

    /// Create an editor over the starter document
    #[wasm_bindgen(js_name = withSeedContent)]
    pub fn with_seed_content() -> ResumeEditor {
        ResumeEditor {
            doc: Document::seed(),
        }
    }

    // ========================================================================
    // Section operations
    // ========================================================================

    /// Append a new section with one empty paragraph; returns its id
    #[wasm_bindgen(js_name = addSection)]
    pub fn add_section(&mut self) -> String {
        let id = self.doc.add_section();
        wasm_log!("addSection -> {}", id);
        id
    }

    /// Delete a section and all its blocks
    #[wasm_bindgen(js_name = removeSection)]
    pub fn remove_section(&mut self, section_id: &str) {
        self.doc.remove_section(section_id);
    }

    /// Flip a section's visibility
    #[wasm_bindgen(js_name = toggleVisible)]
    pub fn toggle_visible(&mut self, section_id: &str) {
        self.doc.toggle_visible(section_id);
    }

    /// Move a section from one index to another (completed drag gesture)
    #[wasm_bindgen(js_name = reorderSections)]
    pub fn reorder_sections(&mut self, from_index: usize, to_index: usize) {
        self.doc.reorder_sections(from_index, to_index);
    }

    // ========================================================================
    // Block operations
    // ========================================================================

    /// Replace a block's inline content
    #[wasm_bindgen(js_name = updateBlock)]
    pub fn update_block(&mut self, section_id: &str, block_id: &str, content: &str) {
        self.doc.update_block(section_id, block_id, content);
    }

    /// Change a block's semantic type ("p", "h1", "h2", "h3", "li").
    /// Content is kept verbatim. An unknown tag is ignored.
    #[wasm_bindgen(js_name = changeBlockType)]
    pub fn change_block_type(&mut self, section_id: &str, block_id: &str, block_type: &str) {
        match BlockType::from_tag(block_type) {
            Some(t) => self.doc.change_block_type(section_id, block_id, t),
            None => wasm_warn!("changeBlockType: unknown block type '{}'", block_type),
        }
    }

    /// Move a block within its section (completed drag gesture)
    #[wasm_bindgen(js_name = reorderBlocks)]
    pub fn reorder_blocks(&mut self, section_id: &str, from_index: usize, to_index: usize) {
        self.doc.reorder_blocks(section_id, from_index, to_index);
    }

    /// Remove a block; refuses to remove a section's last block
    #[wasm_bindgen(js_name = removeBlock)]
    pub fn remove_block(&mut self, section_id: &str, block_id: &str) {
        self.doc.remove_block(section_id, block_id);
    }

    // ========================================================================
    // Editing gestures
    // ========================================================================

    /// Split a block at the caret. The host has already partitioned the
    /// rendered content into before/after fragments (see `splitContentAt`).
    /// Returns the new block's id, or null when the block is gone.
    #[wasm_bindgen(js_name = splitBlock)]
    pub fn split_block(
        &mut self,
        section_id: &str,
        block_id: &str,
        before_content: &str,
        after_content: &str,
    ) -> Option<String> {
        wasm_info!("splitBlock called for block {} in section {}", block_id, section_id);
        editing::split_block(&mut self.doc, section_id, block_id, before_content, after_content)
            .map(|outcome| outcome.new_block_id)
    }

    /// Merge a block into its predecessor. Returns
    /// `{ prevBlockId, caretOffset }`, or null when the block is first in
    /// its section or gone.
    #[wasm_bindgen(js_name = mergeWithPrev)]
    pub fn merge_with_prev(
        &mut self,
        section_id: &str,
        block_id: &str,
    ) -> Result<JsValue, JsValue> {
        wasm_info!("mergeWithPrev called for block {} in section {}", block_id, section_id);
        match editing::merge_with_prev(&mut self.doc, section_id, block_id) {
            Some(outcome) => helpers::serialize(&outcome, "Failed to serialize merge outcome"),
            None => Ok(JsValue::NULL),
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Dump the full section/block tree
    pub fn sections(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(&self.doc.sections, "Failed to serialize sections")
    }

    /// Replace the document with a section tree previously dumped by
    /// `sections()`, letting the host carry editor state across remounts.
    /// A dump with an empty-blocks section is rejected wholesale.
    #[wasm_bindgen(js_name = loadSections)]
    pub fn load_sections(&mut self, sections: JsValue) -> Result<(), JsValue> {
        let sections: Vec<crate::models::Section> =
            helpers::deserialize(sections, "Failed to deserialize sections")?;
        if sections.iter().any(|s| s.blocks.is_empty()) {
            wasm_error!("loadSections rejected: a section must hold at least one block");
            return Err(JsValue::from_str("a section must hold at least one block"));
        }
        wasm_info!("loadSections: restored {} sections", sections.len());
        self.doc = Document { sections };
        Ok(())
    }

    /// Project the visible sections into the preview display list
    pub fn preview(&self) -> Result<JsValue, JsValue> {
        let list = render::project(&self.doc);
        helpers::serialize(&list, "Failed to serialize preview list")
    }

    /// Render the preview as print-target markup
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        render::to_html(&render::project(&self.doc))
    }

    /// Number of sections in the document
    #[wasm_bindgen(js_name = sectionCount)]
    pub fn section_count(&self) -> usize {
        self.doc.sections.len()
    }
}

impl Default for ResumeEditor {
    fn default() -> Self {
        Self::new()
    }
}
