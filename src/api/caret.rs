//! Caret utilities exposed to the host
//!
//! The host owns caret placement against the rendered DOM; these
//! bindings give it the markup-transparent offset arithmetic from
//! `crate::text` so both sides agree on what "offset N" means.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::text;

#[derive(Serialize)]
struct SplitContent {
    before: String,
    after: String,
}

/// Visible character count of an inline markup fragment, tags excluded
#[wasm_bindgen(js_name = visibleLength)]
pub fn visible_length(content: &str) -> usize {
    text::fragment_len(content)
}

/// Locate a linear caret offset inside an inline fragment. Returns
/// `{ path, offset }`: the child-index path to the text leaf and the
/// character offset within it, clamped to the last boundary.
#[wasm_bindgen(js_name = caretLocation)]
pub fn caret_location(content: &str, offset: usize) -> Result<JsValue, JsValue> {
    let nodes = text::parse_fragment(content);
    let location = text::locate(&nodes, offset);
    helpers::serialize(&location, "Failed to serialize caret location")
}

/// Partition an inline fragment at a caret offset into
/// `{ before, after }` fragments, reopening any straddled inline
/// elements on the right side. Feeds `splitBlock`.
#[wasm_bindgen(js_name = splitContentAt)]
pub fn split_content_at(content: &str, offset: usize) -> Result<JsValue, JsValue> {
    let nodes = text::parse_fragment(content);
    let (before, after) = text::split_at(&nodes, offset);
    let result = SplitContent {
        before: text::to_html(&before),
        after: text::to_html(&after),
    };
    helpers::serialize(&result, "Failed to serialize split content")
}
