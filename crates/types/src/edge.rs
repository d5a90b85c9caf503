//! Directed edges and the coordinator-side edge table.

use crate::NodeLabel;
use std::fmt;

/// Identifier of a directed edge.
///
/// Ids are 1-based and assigned in creation order. The id is purely logical
/// edge identity; which execution unit owns an edge is decided separately by
/// the engine's assignment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

impl EdgeId {
    /// Zero-based index into id-ordered storage.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Direction of a directed edge relative to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    /// Parent → child.
    Forward,
    /// Child → parent.
    Reverse,
}

impl EdgeDirection {
    pub fn is_forward(self) -> bool {
        matches!(self, EdgeDirection::Forward)
    }
}

/// A directed arc between two labeled nodes.
///
/// Every tree edge produces exactly two records: a forward edge parent→child
/// and a reverse edge child→parent, created back to back so their ids are
/// adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub start: NodeLabel,
    pub end: NodeLabel,
}

/// All directed edges in id order.
///
/// Built once by the coordinator and read-only afterwards; used to map a
/// reported edge id back to its end-node label and to locate the terminus
/// edge during tour fix-up.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Append the next edge, assigning the next id in sequence.
    pub fn push(&mut self, start: NodeLabel, end: NodeLabel) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32 + 1);
        self.edges.push(Edge { id, start, end });
        id
    }

    /// Total number of directed edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Look up an edge by id. Ids handed out by [`EdgeTable::push`] are always
    /// valid here.
    pub fn get(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// The last edge in creation order whose end node is `node`.
    ///
    /// For the root this is the terminus edge of the Euler tour. Returns
    /// `None` only if no edge ends at `node` (the root of a single-node tree,
    /// which never reaches this code).
    pub fn last_ending_at(&self, node: NodeLabel) -> Option<EdgeId> {
        self.edges
            .iter()
            .rev()
            .find(|edge| edge.end == node)
            .map(|edge| edge.id)
    }

    /// Iterate edges in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_assigned_in_creation_order() {
        let mut table = EdgeTable::new();
        let a = NodeLabel('A');
        let b = NodeLabel('B');

        let forward = table.push(a, b);
        let reverse = table.push(b, a);

        assert_eq!(forward, EdgeId(1));
        assert_eq!(reverse, EdgeId(2));
        assert_eq!(table.get(forward).end, b);
        assert_eq!(table.get(reverse).end, a);
    }

    #[test]
    fn test_last_ending_at_picks_latest() {
        let mut table = EdgeTable::new();
        let a = NodeLabel('A');
        let b = NodeLabel('B');
        let c = NodeLabel('C');

        table.push(a, b);
        table.push(b, a);
        table.push(a, c);
        let last_into_a = table.push(c, a);

        assert_eq!(table.last_ending_at(a), Some(last_into_a));
        assert_eq!(table.last_ending_at(NodeLabel('X')), None);
    }
}
