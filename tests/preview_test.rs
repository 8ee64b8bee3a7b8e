// Preview projection: list grouping, visibility filtering, and the
// empty-document placeholder.

use resume_editor_wasm::models::{Block, BlockType, Document, Section};
use resume_editor_wasm::render::{project, to_html, PreviewNode};

fn doc_with_one_section(blocks: Vec<Block>) -> (Document, String) {
    let section = Section::with_blocks(blocks);
    let sid = section.id.clone();
    (
        Document {
            sections: vec![section],
        },
        sid,
    )
}

#[test]
fn list_runs_group_and_reset() {
    // Blocks [li, li, p, li] -> one list of two, standalone p, list of one
    let (doc, _) = doc_with_one_section(vec![
        Block::new("first", BlockType::Li),
        Block::new("second", BlockType::Li),
        Block::new("interrupt", BlockType::P),
        Block::new("third", BlockType::Li),
    ]);

    let list = project(&doc);
    let nodes = &list.sections[0].nodes;
    assert_eq!(nodes.len(), 3);

    match &nodes[0] {
        PreviewNode::List { items } => {
            let texts: Vec<&str> = items.iter().map(|i| i.content.as_str()).collect();
            assert_eq!(texts, vec!["first", "second"]);
        }
        other => panic!("expected leading list, got {:?}", other),
    }
    assert!(matches!(&nodes[1], PreviewNode::Block { tag, .. } if tag == "p"));
    match &nodes[2] {
        PreviewNode::List { items } => assert_eq!(items[0].content, "third"),
        other => panic!("expected trailing list, got {:?}", other),
    }
}

#[test]
fn hidden_section_vanishes_without_touching_others() {
    let mut doc = Document::seed();
    let first = doc.sections[0].id.clone();
    let second = doc.sections[1].id.clone();

    let before = project(&doc);
    assert_eq!(before.sections.len(), 2);

    doc.toggle_visible(&first);
    let after = project(&doc);

    assert_eq!(after.sections.len(), 1);
    assert_eq!(after.sections[0].section_id, second);
    // The remaining section's projection is byte-identical
    assert_eq!(
        after.sections[0],
        before.sections[1]
    );
}

#[test]
fn all_hidden_renders_placeholder() {
    let mut doc = Document::seed();
    let ids: Vec<String> = doc.sections.iter().map(|s| s.id.clone()).collect();
    for id in &ids {
        doc.toggle_visible(id);
    }

    let list = project(&doc);
    assert!(list.sections.is_empty());
    assert!(list.placeholder.is_some());

    // Toggling one back on drops the placeholder again
    doc.toggle_visible(&ids[0]);
    let list = project(&doc);
    assert_eq!(list.sections.len(), 1);
    assert!(list.placeholder.is_none());
}

#[test]
fn projection_is_deterministic() {
    let doc = Document::seed();
    let a = project(&doc);
    let b = project(&doc);
    assert_eq!(a, b);
    assert_eq!(to_html(&a), to_html(&b));
}

#[test]
fn html_output_wraps_list_items_once() {
    let (doc, sid) = doc_with_one_section(vec![
        Block::new("Skills", BlockType::H2),
        Block::new("Rust", BlockType::Li),
        Block::new("SQL", BlockType::Li),
    ]);

    let html = to_html(&project(&doc));

    assert!(html.contains(&format!("data-section-id=\"{}\"", sid)));
    // Exactly one list container for the run of two items
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);
    assert!(html.contains(">Rust</li>"));
}

#[test]
fn inline_markup_passes_through_untouched() {
    let (doc, _) = doc_with_one_section(vec![Block::new(
        "worked on <b>large</b> systems",
        BlockType::P,
    )]);

    let html = to_html(&project(&doc));
    assert!(html.contains("worked on <b>large</b> systems"));
}
