//! Block type enumeration
//!
//! The closed set of semantic block kinds the editor understands.
//! The serde representation is the lowercase HTML tag so model dumps
//! match what the UI layer renders.

use serde::{Deserialize, Serialize};

/// Semantic kind of a block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Paragraph
    P,
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Sub-heading
    H3,
    /// List item; consecutive runs render as one list
    Li,
}

impl BlockType {
    /// The HTML tag this block renders as
    pub fn tag(&self) -> &'static str {
        match self {
            BlockType::P => "p",
            BlockType::H1 => "h1",
            BlockType::H2 => "h2",
            BlockType::H3 => "h3",
            BlockType::Li => "li",
        }
    }

    /// Parse a lowercase tag string; `None` for anything outside the closed set
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(BlockType::P),
            "h1" => Some(BlockType::H1),
            "h2" => Some(BlockType::H2),
            "h3" => Some(BlockType::H3),
            "li" => Some(BlockType::Li),
            _ => None,
        }
    }

    /// List items group into a shared container when rendered
    pub fn is_list_item(&self) -> bool {
        matches!(self, BlockType::Li)
    }
}

impl Default for BlockType {
    fn default() -> Self {
        BlockType::P
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for t in [BlockType::P, BlockType::H1, BlockType::H2, BlockType::H3, BlockType::Li] {
            assert_eq!(BlockType::from_tag(t.tag()), Some(t));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert_eq!(BlockType::from_tag("div"), None);
        assert_eq!(BlockType::from_tag("H1"), None);
        assert_eq!(BlockType::from_tag(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_tag() {
        let json = serde_json::to_string(&BlockType::Li).unwrap();
        assert_eq!(json, "\"li\"");
        let back: BlockType = serde_json::from_str("\"h3\"").unwrap();
        assert_eq!(back, BlockType::H3);
    }
}
