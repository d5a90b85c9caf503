//! Level-order (array) encoding of the input tree.

use std::fmt;
use thiserror::Error;

/// A tree vertex, identified by its input symbol.
///
/// Labels are the only node representation in the pipeline; nodes carry no
/// other state. Label equality is identity, so the input symbols must be
/// pairwise distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeLabel(pub char);

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from validating the input array.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Input tree is empty")]
    Empty,
    #[error("Duplicate node label '{0}'")]
    DuplicateLabel(char),
}

/// A binary tree in level-order array form.
///
/// Positions are 1-indexed: the root is position 1 and position `i` has its
/// left child at `2i` and its right child at `2i + 1`, each present only if
/// the index is within bounds. An array of length `n` therefore always encodes
/// a complete tree on `n` nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOrderTree {
    labels: Vec<NodeLabel>,
}

impl LevelOrderTree {
    /// Parse and validate an input string, one symbol per node.
    pub fn parse(input: &str) -> Result<Self, TreeError> {
        let labels: Vec<NodeLabel> = input.chars().map(NodeLabel).collect();
        if labels.is_empty() {
            return Err(TreeError::Empty);
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(TreeError::DuplicateLabel(label.0));
            }
        }
        Ok(Self { labels })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True for the degenerate single-node tree, which short-circuits the
    /// whole distributed computation.
    pub fn is_single(&self) -> bool {
        self.labels.len() == 1
    }

    /// The root label (position 1).
    pub fn root(&self) -> NodeLabel {
        self.labels[0]
    }

    /// Label at 1-indexed position. Panics if out of range.
    pub fn label(&self, position: usize) -> NodeLabel {
        self.labels[position - 1]
    }

    /// Left child position of `position`, if present.
    pub fn left_child(&self, position: usize) -> Option<usize> {
        let child = 2 * position;
        (child <= self.labels.len()).then_some(child)
    }

    /// Right child position of `position`, if present.
    pub fn right_child(&self, position: usize) -> Option<usize> {
        let child = 2 * position + 1;
        (child <= self.labels.len()).then_some(child)
    }

    /// Number of tree edges (parent/child pairs): `n - 1`.
    pub fn tree_edge_count(&self) -> usize {
        self.labels.len() - 1
    }

    /// Iterate labels in input order.
    pub fn labels(&self) -> impl Iterator<Item = NodeLabel> + '_ {
        self.labels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(LevelOrderTree::parse(""), Err(TreeError::Empty));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        assert_eq!(
            LevelOrderTree::parse("ABA"),
            Err(TreeError::DuplicateLabel('A'))
        );
    }

    #[test]
    fn test_child_positions() {
        let tree = LevelOrderTree::parse("ABCDE").unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.root(), NodeLabel('A'));

        // B (position 2) has children D (4) and E (5).
        assert_eq!(tree.left_child(2), Some(4));
        assert_eq!(tree.right_child(2), Some(5));

        // C (position 3) is a leaf in a 5-node complete tree.
        assert_eq!(tree.left_child(3), None);
        assert_eq!(tree.right_child(3), None);
    }

    #[test]
    fn test_partial_last_level() {
        // Position 2 has a left child (4) but no right child (5 out of range).
        let tree = LevelOrderTree::parse("ABCD").unwrap();
        assert_eq!(tree.left_child(2), Some(4));
        assert_eq!(tree.right_child(2), None);
        assert_eq!(tree.tree_edge_count(), 3);
    }

    #[test]
    fn test_single_node() {
        let tree = LevelOrderTree::parse("A").unwrap();
        assert!(tree.is_single());
        assert_eq!(tree.tree_edge_count(), 0);
    }
}
