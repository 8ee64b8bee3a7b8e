//! Inline text utilities
//!
//! Pure tree walks over block content: parse inline markup into an
//! abstract tree, measure visible length, locate caret offsets, and
//! split losslessly at an offset. No knowledge of sections or blocks,
//! and no dependency on any rendering engine.

pub mod inline;

// Re-exports for convenience
pub use inline::{
    fragment_len, locate, parse_fragment, split_at, to_html, visible_len, CaretLocation,
    InlineNode,
};
