//! Resume Editor WASM API
//!
//! The JavaScript-facing surface of the crate, organized by functional
//! domain:
//!
//! - `helpers`: serialization, validation and console logging shared by
//!   all operations
//! - `editor`: the `ResumeEditor` handle (document model + editing
//!   gestures)
//! - `page_flow`: the `PageFlow` handle (pagination probe, fillers,
//!   settle/resize scheduling)
//! - `caret`: offset arithmetic for the host's caret placement
//! - `export`: the print/PDF trigger

pub mod caret;
pub mod editor;
pub mod export;
pub mod helpers;
pub mod page_flow;

pub use caret::{caret_location, split_content_at, visible_length};
pub use editor::ResumeEditor;
pub use export::open_print_dialog;
pub use page_flow::PageFlow;
