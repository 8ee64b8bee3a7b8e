//! Preview rendering
//!
//! Projects the document model into a display list for JavaScript to
//! render, following the same contract as the rest of the crate: Rust
//! computes structure, the host just materializes elements.

pub mod preview;

pub use preview::{
    group_blocks, project, to_html, ListItem, PreviewList, PreviewNode, PreviewSection,
};
