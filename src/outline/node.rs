//! Outline tree types produced by the parser.

use crate::common::generate_id;

/// One entry of the outline.
///
/// A node exclusively owns its children; the tree has no sharing and no
/// back references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Parse-time identifier. Serialization assigns its own element ids.
    pub id: String,
    /// Display text with markers and surrounding whitespace removed
    pub text: String,
    /// Rank derived from the source line's heading depth or bullet indent
    pub level: usize,
    /// Child nodes in source order
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a childless node with a freshly generated identifier.
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            id: generate_id(),
            text: text.into(),
            level,
            children: Vec::new(),
        }
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::subtree_len).sum::<usize>()
    }
}

/// Result of parsing one outline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Map title; the default placeholder when no title line was present
    pub title: String,
    /// Top-level topics in source order
    pub roots: Vec<OutlineNode>,
}

impl Document {
    /// Whether the outline produced no topics at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(OutlineNode::subtree_len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf_with_fresh_id() {
        let a = OutlineNode::new("A", 1);
        let b = OutlineNode::new("A", 1);
        assert!(a.is_leaf());
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, "A");
    }

    #[test]
    fn test_node_count() {
        let mut root = OutlineNode::new("root", 1);
        let mut child = OutlineNode::new("child", 2);
        child.children.push(OutlineNode::new("grandchild", 3));
        root.children.push(child);
        root.children.push(OutlineNode::new("sibling", 2));

        let doc = Document {
            title: "T".to_string(),
            roots: vec![root, OutlineNode::new("other", 1)],
        };
        assert_eq!(doc.node_count(), 5);
        assert!(!doc.is_empty());
    }
}
