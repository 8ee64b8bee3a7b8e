//! Block editing engine
//!
//! Higher-level text-editing gestures (split on Enter, merge on Backspace
//! at block start) expressed in terms of document model primitives, plus
//! the caret-restoration data the UI needs to refocus after a structural
//! edit.
//!
//! Editing gestures fire from transient DOM event state that can race
//! with structural changes, so every operation here degrades to a `None`
//! result when the referenced section or block no longer exists. Nothing
//! in this module panics or throws.

use serde::{Deserialize, Serialize};

use crate::models::{Block, BlockType, Document};
use crate::text;

/// Result of a split: where the caret should go next (start of the new block)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutcome {
    /// Id of the newly inserted block holding the `after` fragment
    pub new_block_id: String,
}

/// Result of a merge: the surviving block and the caret offset at the seam
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MergeOutcome {
    /// Id of the previous block the content was merged into
    pub prev_block_id: String,

    /// Caret offset in visible characters: exactly the previous block's
    /// pre-merge content length, so the caret lands at the old seam
    pub caret_offset: usize,
}

/// Split a block at a caret position.
///
/// The caller has already partitioned the rendered content into `before`
/// and `after` fragments at the caret (see [`crate::text::split_at`] for
/// the markup-aware partition). The original block keeps `before`; a new
/// paragraph block holding `after` is inserted immediately after it in
/// the same section.
///
/// Returns the new block's id so the caller can focus its start, or
/// `None` when the section or block is gone.
pub fn split_block(
    doc: &mut Document,
    section_id: &str,
    block_id: &str,
    before: &str,
    after: &str,
) -> Option<SplitOutcome> {
    let index = doc.section(section_id)?.block_index(block_id)?;

    doc.update_block(section_id, block_id, before);

    let new_block = Block::new(after, BlockType::P);
    let new_block_id = new_block.id.clone();
    doc.insert_block_after(section_id, index, new_block);

    Some(SplitOutcome { new_block_id })
}

/// Merge a block into its predecessor.
///
/// Concatenates the previous block's content with this block's content
/// into the previous block, then deletes this block. The previous block
/// keeps its own type even when the types differ (a paragraph merged
/// into a heading stays a heading).
///
/// Returns the previous block's id and the caret offset at the seam, or
/// `None` when the block is already first in its section (merging across
/// section boundaries is unsupported) or when section/block are gone.
pub fn merge_with_prev(
    doc: &mut Document,
    section_id: &str,
    block_id: &str,
) -> Option<MergeOutcome> {
    let section = doc.section(section_id)?;
    let index = section.block_index(block_id)?;
    if index == 0 {
        return None;
    }

    let prev = &section.blocks[index - 1];
    let prev_block_id = prev.id.clone();
    let caret_offset = text::fragment_len(&prev.content);
    let merged = format!("{}{}", prev.content, section.blocks[index].content);

    doc.update_block(section_id, &prev_block_id, &merged);
    doc.remove_block(section_id, block_id);

    Some(MergeOutcome {
        prev_block_id,
        caret_offset,
    })
}
