//! Edge and adjacency construction from the level-order array.

use preorder_types::{Adjacency, AdjacencyEntry, EdgeTable, LevelOrderTree};

/// Derive the directed edge set and per-node adjacency from the array
/// encoding.
///
/// Positions are scanned in input order; each present child produces a
/// forward edge parent→child immediately followed by its reverse edge
/// child→parent, so the two partners always have adjacent ids. The parent's
/// forward entries for one scan step (left before right) are appended as a
/// single batch to the parent's list, and each child's reverse entry opens
/// that child's own list. The resulting entry ordering within a node's list
/// is what the Euler tour wraps over, so it must not be changed.
pub fn build_graph(tree: &LevelOrderTree) -> (EdgeTable, Adjacency) {
    let mut edges = EdgeTable::new();
    let mut adjacency = Adjacency::new();

    for position in 1..=tree.len() {
        let parent = tree.label(position);
        let mut forward_entries = Vec::new();
        let mut reverse_batches = Vec::new();

        let children = [tree.left_child(position), tree.right_child(position)];
        for child_position in children.into_iter().flatten() {
            let child = tree.label(child_position);
            let forward = edges.push(parent, child);
            let reverse = edges.push(child, parent);

            forward_entries.push(AdjacencyEntry::new(parent, forward, reverse, true));
            reverse_batches.push(vec![AdjacencyEntry::new(child, reverse, forward, false)]);
        }

        adjacency.push_entries(forward_entries);
        for batch in reverse_batches {
            adjacency.push_entries(batch);
        }
    }

    (edges, adjacency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use preorder_types::{EdgeId, NodeLabel};

    #[test]
    fn test_edge_count_is_twice_tree_edges() {
        for input in ["AB", "ABC", "ABCDE", "ABCDEFG", "ABCDEFGHIJ"] {
            let tree = LevelOrderTree::parse(input).unwrap();
            let (edges, adjacency) = build_graph(&tree);
            assert_eq!(edges.len(), 2 * tree.tree_edge_count());
            assert_eq!(adjacency.iter().count(), edges.len());
        }
    }

    #[test]
    fn test_adjacency_ordering_for_inner_node() {
        // A root; B, C children of A; D, E children of B.
        let tree = LevelOrderTree::parse("ABCDE").unwrap();
        let (_, adjacency) = build_graph(&tree);

        // B is discovered as A's left child first (reverse entry), then
        // scanned as a parent (forward entries to D and E, left before right).
        let b = adjacency.entries_of(NodeLabel('B')).unwrap();
        assert_eq!(b.len(), 3);
        assert!(!b[0].inserted_as_forward);
        assert_eq!(b[0].forward_id, EdgeId(2));
        assert_eq!(b[1].forward_id, EdgeId(5));
        assert_eq!(b[2].forward_id, EdgeId(7));

        // The root's list holds only its own forward entries.
        let a = adjacency.entries_of(NodeLabel('A')).unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|entry| entry.inserted_as_forward));
        assert_eq!(a[0].forward_id, EdgeId(1));
        assert_eq!(a[1].forward_id, EdgeId(3));
    }

    #[test]
    fn test_every_non_root_node_has_one_incoming_forward_edge() {
        let tree = LevelOrderTree::parse("ABCDEFGH").unwrap();
        let (edges, adjacency) = build_graph(&tree);

        for node in tree.labels().skip(1) {
            let incoming_forward = edges
                .iter()
                .filter(|edge| {
                    edge.end == node
                        && adjacency.direction_of(edge.id).unwrap().is_forward()
                })
                .count();
            assert_eq!(incoming_forward, 1, "node {node}");
        }
    }
}
