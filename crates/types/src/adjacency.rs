//! Per-node adjacency lists.
//!
//! The adjacency table associates every node with the ordered sequence of
//! edges incident to it, in discovery order. That ordering is load-bearing:
//! the Euler tour continues from an entry to the entry after it (wrapping to
//! the list head), so reordering entries changes the tour.

use crate::{EdgeDirection, EdgeId, NodeLabel};

/// One incident edge of a node.
///
/// `forward_id` is the edge owned by this entry (the edge leaving `node` when
/// `inserted_as_forward` is true, the edge arriving back at the parent when it
/// is false); `reverse_id` is that edge's designated reverse partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub node: NodeLabel,
    pub forward_id: EdgeId,
    pub reverse_id: EdgeId,
    pub inserted_as_forward: bool,
}

impl AdjacencyEntry {
    pub fn new(
        node: NodeLabel,
        forward_id: EdgeId,
        reverse_id: EdgeId,
        inserted_as_forward: bool,
    ) -> Self {
        Self {
            node,
            forward_id,
            reverse_id,
            inserted_as_forward,
        }
    }
}

/// Node → ordered incident-edge lists.
///
/// A node's list is created on first sight and extended on later sightings,
/// so a non-root node's list starts with the reverse entry by which it is
/// reached from its parent, followed by its own forward entries in left/right
/// order. Node identity is label equality.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    lists: Vec<Vec<AdjacencyEntry>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Append a batch of entries for one node, extending the node's existing
    /// list or creating a new one. Empty batches are ignored.
    pub fn push_entries(&mut self, entries: Vec<AdjacencyEntry>) {
        let Some(&first) = entries.first() else {
            return;
        };
        for list in &mut self.lists {
            if list[0].node == first.node {
                list.extend(entries);
                return;
            }
        }
        self.lists.push(entries);
    }

    /// Number of nodes with at least one incident edge.
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// The ordered entry list of `node`, if any edge is incident to it.
    pub fn entries_of(&self, node: NodeLabel) -> Option<&[AdjacencyEntry]> {
        self.lists
            .iter()
            .find(|list| list[0].node == node)
            .map(|list| list.as_slice())
    }

    /// Iterate all entries across all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEntry> {
        self.lists.iter().flatten()
    }

    /// Iterate per-node lists in discovery order.
    pub fn lists(&self) -> impl Iterator<Item = &[AdjacencyEntry]> {
        self.lists.iter().map(|list| list.as_slice())
    }

    /// Classify an edge id by scanning forward-tagged entries: the edge is
    /// forward if some forward entry owns it, reverse if some forward entry
    /// names it as partner.
    pub fn direction_of(&self, edge: EdgeId) -> Option<EdgeDirection> {
        for entry in self.iter() {
            if !entry.inserted_as_forward {
                continue;
            }
            if entry.forward_id == edge {
                return Some(EdgeDirection::Forward);
            }
            if entry.reverse_id == edge {
                return Some(EdgeDirection::Reverse);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(node: char, forward: u32, reverse: u32, is_forward: bool) -> AdjacencyEntry {
        AdjacencyEntry::new(NodeLabel(node), EdgeId(forward), EdgeId(reverse), is_forward)
    }

    #[test]
    fn test_lists_extend_by_label() {
        let mut adj = Adjacency::new();
        adj.push_entries(vec![entry('B', 2, 1, false)]);
        adj.push_entries(vec![entry('B', 3, 4, true), entry('B', 5, 6, true)]);

        let list = adj.entries_of(NodeLabel('B')).unwrap();
        assert_eq!(list.len(), 3);
        // Reverse entry first (discovery order), then the node's own forwards.
        assert!(!list[0].inserted_as_forward);
        assert_eq!(list[1].forward_id, EdgeId(3));
        assert_eq!(list[2].forward_id, EdgeId(5));
    }

    #[test]
    fn test_direction_classification() {
        let mut adj = Adjacency::new();
        adj.push_entries(vec![entry('A', 1, 2, true)]);
        adj.push_entries(vec![entry('B', 2, 1, false)]);

        assert_eq!(adj.direction_of(EdgeId(1)), Some(EdgeDirection::Forward));
        assert_eq!(adj.direction_of(EdgeId(2)), Some(EdgeDirection::Reverse));
        assert_eq!(adj.direction_of(EdgeId(9)), None);
    }
}
