//! Resume Editor WASM Module
//!
//! Core of the resume authoring tool: the Section/Block document model,
//! the editing engine, pagination-aware preview layout, and the print
//! export trigger. The UI layer renders what this module computes.

pub mod api;
pub mod editing;
pub mod layout;
pub mod models;
pub mod render;
pub mod text;

// Re-export commonly used types
pub use editing::{MergeOutcome, SplitOutcome};
pub use models::{Block, BlockType, Document, Section};
pub use render::{PreviewList, PreviewNode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Resume Editor WASM module initialized");
}
