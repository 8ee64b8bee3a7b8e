//! Models module for the resume editor
//!
//! This module contains the data models for the Section/Block
//! document architecture.

pub mod block_type;
pub mod core;

// Re-export commonly used types
pub use block_type::BlockType;
pub use core::{Block, Document, Section};
