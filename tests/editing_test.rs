// Editing gestures against the document model: split, merge, reorder,
// and the invariants that hold across arbitrary call sequences.

use resume_editor_wasm::editing::{merge_with_prev, split_block};
use resume_editor_wasm::models::{Block, BlockType, Document, Section};

fn paragraph_section(contents: &[&str]) -> (Document, String, Vec<String>) {
    let blocks: Vec<Block> = contents
        .iter()
        .map(|c| Block::new(*c, BlockType::P))
        .collect();
    let block_ids = blocks.iter().map(|b| b.id.clone()).collect();
    let section = Section::with_blocks(blocks);
    let section_id = section.id.clone();
    (
        Document {
            sections: vec![section],
        },
        section_id,
        block_ids,
    )
}

fn contents(doc: &Document, section_id: &str) -> Vec<String> {
    doc.section(section_id)
        .unwrap()
        .blocks
        .iter()
        .map(|b| b.content.clone())
        .collect()
}

#[test]
fn split_inserts_new_middle_block() {
    // Section [p "hello", p "world"]; split block 1 at offset 2
    let (mut doc, sid, bids) = paragraph_section(&["hello", "world"]);

    let outcome = split_block(&mut doc, &sid, &bids[0], "he", "llo").unwrap();

    assert_eq!(contents(&doc, &sid), vec!["he", "llo", "world"]);
    let middle = &doc.section(&sid).unwrap().blocks[1];
    assert_eq!(middle.id, outcome.new_block_id);
    assert_eq!(middle.block_type, BlockType::P);
}

#[test]
fn merge_restores_split_content() {
    // Section [p "he", p "llo"]; merge block 2 into block 1
    let (mut doc, sid, bids) = paragraph_section(&["he", "llo"]);

    let outcome = merge_with_prev(&mut doc, &sid, &bids[1]).unwrap();

    assert_eq!(contents(&doc, &sid), vec!["hello"]);
    assert_eq!(outcome.prev_block_id, bids[0]);
    assert_eq!(outcome.caret_offset, 2);
}

#[test]
fn split_then_merge_is_identity_on_content() {
    let (mut doc, sid, bids) = paragraph_section(&["hello world"]);

    for offset in [0, 3, 11] {
        let before: String = "hello world".chars().take(offset).collect();
        let after: String = "hello world".chars().skip(offset).collect();

        let split = split_block(&mut doc, &sid, &bids[0], &before, &after).unwrap();
        let merge = merge_with_prev(&mut doc, &sid, &split.new_block_id).unwrap();

        assert_eq!(contents(&doc, &sid), vec!["hello world"]);
        assert_eq!(merge.prev_block_id, bids[0]);
        assert_eq!(merge.caret_offset, offset);
    }
}

#[test]
fn merge_across_section_boundary_is_unsupported() {
    let mut doc = Document::seed();
    let second_section = doc.sections[1].id.clone();
    let first_block = doc.sections[1].blocks[0].id.clone();
    let snapshot = doc.clone();

    // First block of its section: no merge, no mutation
    assert!(merge_with_prev(&mut doc, &second_section, &first_block).is_none());
    assert_eq!(doc, snapshot);
}

#[test]
fn removing_last_block_is_a_noop() {
    let (mut doc, sid, bids) = paragraph_section(&["only"]);

    doc.remove_block(&sid, &bids[0]);

    let section = doc.section(&sid).unwrap();
    assert_eq!(section.blocks.len(), 1);
    assert_eq!(section.blocks[0].id, bids[0]);
}

#[test]
fn section_never_empties_under_removal() {
    let (mut doc, sid, bids) = paragraph_section(&["a", "b", "c", "d"]);

    // Hammer removals in every order; count must bottom out at one
    for bid in bids.iter().rev() {
        doc.remove_block(&sid, bid);
        assert!(!doc.section(&sid).unwrap().blocks.is_empty());
    }
    for bid in &bids {
        doc.remove_block(&sid, bid);
        assert!(!doc.section(&sid).unwrap().blocks.is_empty());
    }
    assert_eq!(doc.section(&sid).unwrap().blocks.len(), 1);
}

#[test]
fn section_reorder_moves_first_to_last() {
    // Three sections [A, B, C]; reorder(0, 2) -> [B, C, A]
    let mut doc = Document::new();
    let a = doc.add_section();
    let b = doc.add_section();
    let c = doc.add_section();

    doc.reorder_sections(0, 2);

    let order: Vec<&str> = doc.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(order, vec![b.as_str(), c.as_str(), a.as_str()]);
}

#[test]
fn block_reorder_is_a_permutation() {
    let (mut doc, sid, bids) = paragraph_section(&["a", "b", "c"]);

    doc.reorder_blocks(&sid, 2, 0);

    let order: Vec<String> = doc
        .section(&sid)
        .unwrap()
        .blocks
        .iter()
        .map(|b| b.id.clone())
        .collect();
    assert_eq!(order, vec![bids[2].clone(), bids[0].clone(), bids[1].clone()]);

    let mut sorted = order.clone();
    sorted.sort();
    let mut expected = bids.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn stale_ids_degrade_to_noops() {
    let (mut doc, sid, bids) = paragraph_section(&["a", "b"]);

    // Simulate a race: the block is deleted, then events referencing it land
    doc.remove_block(&sid, &bids[1]);
    let snapshot = doc.clone();

    assert!(split_block(&mut doc, &sid, &bids[1], "x", "y").is_none());
    assert!(merge_with_prev(&mut doc, &sid, &bids[1]).is_none());
    doc.update_block(&sid, &bids[1], "ghost");
    doc.remove_block(&sid, &bids[1]);
    assert_eq!(doc, snapshot);
}

#[test]
fn merge_into_different_type_keeps_previous_type() {
    let heading = Block::new("Education", BlockType::H3);
    let body = Block::new(" 2019-2023", BlockType::P);
    let heading_id = heading.id.clone();
    let body_id = body.id.clone();
    let section = Section::with_blocks(vec![heading, body]);
    let sid = section.id.clone();
    let mut doc = Document {
        sections: vec![section],
    };

    let outcome = merge_with_prev(&mut doc, &sid, &body_id).unwrap();

    let merged = &doc.section(&sid).unwrap().blocks[0];
    assert_eq!(outcome.prev_block_id, heading_id);
    assert_eq!(merged.block_type, BlockType::H3);
    assert_eq!(merged.content, "Education 2019-2023");
}
