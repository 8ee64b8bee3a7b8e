//! WASM build test
//!
//! Exercises the JavaScript-facing handles in a browser environment.
#![cfg(target_arch = "wasm32")]

use resume_editor_wasm::api::{PageFlow, ResumeEditor};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_editor_creation() {
    let mut editor = ResumeEditor::with_seed_content();
    assert_eq!(editor.section_count(), 2);

    let id = editor.add_section();
    assert!(id.starts_with("section-"));
    assert_eq!(editor.section_count(), 3);

    editor.remove_section(&id);
    assert_eq!(editor.section_count(), 2);
}

#[wasm_bindgen_test]
fn test_preview_html_renders_sections() {
    let editor = ResumeEditor::with_seed_content();
    let html = editor.preview_html();
    assert!(html.contains("<section data-section-id="));
}

#[wasm_bindgen_test]
fn test_sections_round_trip_through_load() {
    let source = ResumeEditor::with_seed_content();
    let dump = source.sections().unwrap();

    let mut editor = ResumeEditor::new();
    editor.load_sections(dump).unwrap();
    assert_eq!(editor.section_count(), source.section_count());
    assert_eq!(editor.preview_html(), source.preview_html());
}

#[wasm_bindgen_test]
fn test_page_flow_probes_a_real_height() {
    let mut flow = PageFlow::new();
    // In a browser the probe returns something plausible for A4
    assert!(flow.page_height_px() > 0.0);

    let fillers = flow.compute_fillers(vec![0.0, flow.page_height_px() / 2.0]);
    assert_eq!(fillers.len(), 2);
    assert_eq!(fillers[0], 0.0);

    flow.dispose();
}
