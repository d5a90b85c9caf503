//! Deterministic single-threaded reference implementation.
//!
//! Runs the same Euler-tour suffix-sum reduction as the distributed engine,
//! but synchronously over plain arrays. Used to validate the algorithm
//! exhaustively on small trees (in particular the reverse-edge successor
//! handling and the convergence bound) and as the reference the engine's
//! end-to-end tests compare against.

use crate::{
    build_graph, edge_direction, fix_up, round_count, terminus_edge, tour_successor, TourError,
};
use preorder_types::{EdgeId, EdgeTable, LevelOrderTree, NodeLabel};

/// Snapshot of the reduction state after a number of synchronous rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Converged (or partially converged) suffix sums, indexed by edge id.
    pub weights: Vec<u32>,
    /// Successor pointers, indexed by edge id.
    pub successors: Vec<EdgeId>,
    /// Which edges are forward, indexed by edge id.
    pub forward: Vec<bool>,
    /// The self-pointing terminus edge.
    pub terminus: EdgeId,
}

/// Run `rounds` synchronous pointer-jumping rounds over the fixed-up tour of
/// `tree`. Each round reads the previous round's state for every edge, the
/// same read-before-write discipline the distributed barrier enforces.
pub fn reduce(tree: &LevelOrderTree, rounds: u32) -> Result<(EdgeTable, Reduction), TourError> {
    let (edges, adjacency) = build_graph(tree);

    let mut successors = Vec::with_capacity(edges.len());
    let mut forward = Vec::with_capacity(edges.len());
    for edge in edges.iter() {
        successors.push(tour_successor(edge.id, &adjacency)?);
        forward.push(edge_direction(edge.id, &adjacency)?.is_forward());
    }

    let terminus = terminus_edge(&edges, tree.root())?;
    fix_up(&mut successors, terminus);

    let mut weights: Vec<u32> = forward.iter().map(|&f| u32::from(f)).collect();
    weights[terminus.index()] = 0;

    for _ in 0..rounds {
        let previous_weights = weights.clone();
        let previous_successors = successors.clone();
        for i in 0..edges.len() {
            let successor = previous_successors[i];
            weights[i] = previous_weights[i] + previous_weights[successor.index()];
            successors[i] = previous_successors[successor.index()];
        }
    }

    Ok((
        edges,
        Reduction {
            weights,
            successors,
            forward,
            terminus,
        },
    ))
}

/// Full reference computation: preorder sequence of `tree` via the reduction,
/// root first, remaining nodes by ascending position `n − weight`.
pub fn tour_preorder(tree: &LevelOrderTree) -> Result<Vec<NodeLabel>, TourError> {
    if tree.is_single() {
        return Ok(vec![tree.root()]);
    }

    let participants = 2 * tree.tree_edge_count() + 1;
    let (edges, reduction) = reduce(tree, round_count(participants))?;

    let mut by_position: Vec<Option<NodeLabel>> = vec![None; tree.tree_edge_count()];
    for edge in edges.iter() {
        if reduction.forward[edge.id.index()] {
            let position = tree.len() as u32 - reduction.weights[edge.id.index()];
            by_position[position as usize - 1] = Some(edge.end);
        }
    }

    let mut order = vec![tree.root()];
    order.extend(by_position.into_iter().flatten());
    Ok(order)
}

/// Plain recursive (root, left, right) traversal of the array encoding; the
/// ground truth every other implementation is checked against.
pub fn recursive_preorder(tree: &LevelOrderTree) -> Vec<NodeLabel> {
    fn walk(tree: &LevelOrderTree, position: usize, order: &mut Vec<NodeLabel>) {
        order.push(tree.label(position));
        if let Some(left) = tree.left_child(position) {
            walk(tree, left, order);
        }
        if let Some(right) = tree.right_child(position) {
            walk(tree, right, order);
        }
    }

    let mut order = Vec::with_capacity(tree.len());
    walk(tree, 1, &mut order);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of_size(n: usize) -> LevelOrderTree {
        let labels: String = (0..n).map(|i| (b'A' + i as u8) as char).collect();
        LevelOrderTree::parse(&labels).unwrap()
    }

    fn as_string(order: &[NodeLabel]) -> String {
        order.iter().map(|label| label.0).collect()
    }

    #[test]
    fn test_known_preorders() {
        for (input, expected) in [
            ("ABC", "ABC"),
            ("ABCDE", "ABDEC"),
            ("ABCDEFG", "ABDECFG"),
        ] {
            let tree = LevelOrderTree::parse(input).unwrap();
            assert_eq!(as_string(&tour_preorder(&tree).unwrap()), expected);
        }
    }

    #[test]
    fn test_matches_recursive_preorder_exhaustively() {
        for n in 2..=16 {
            let tree = tree_of_size(n);
            assert_eq!(
                tour_preorder(&tree).unwrap(),
                recursive_preorder(&tree),
                "size {n}"
            );
        }
    }

    #[test]
    fn test_weights_are_path_distances_in_forward_edges() {
        // The converged weight of an edge counts the forward edges from it
        // (inclusive) to the terminus along the tour.
        for n in 2..=12 {
            let tree = tree_of_size(n);
            let participants = 2 * tree.tree_edge_count() + 1;
            let (edges, reduction) = reduce(&tree, round_count(participants)).unwrap();

            // Walk the pre-fix-up tour chain from each edge and count forwards.
            let (_, adjacency) = build_graph(&tree);
            for edge in edges.iter() {
                let mut expected = 0;
                let mut current = edge.id;
                loop {
                    if reduction.forward[current.index()] && current != reduction.terminus {
                        expected += 1;
                    }
                    if current == reduction.terminus {
                        break;
                    }
                    current = tour_successor(current, &adjacency).unwrap();
                }
                assert_eq!(reduction.weights[edge.id.index()], expected, "size {n}, {}", edge.id);
            }
        }
    }

    #[test]
    fn test_weights_stable_after_final_round() {
        for n in 2..=16 {
            let tree = tree_of_size(n);
            let participants = 2 * tree.tree_edge_count() + 1;
            let rounds = round_count(participants);
            let (_, converged) = reduce(&tree, rounds).unwrap();
            let (_, one_more) = reduce(&tree, rounds + 1).unwrap();
            assert_eq!(converged.weights, one_more.weights, "size {n}");
        }
    }

    #[test]
    fn test_all_pointers_converge_to_terminus() {
        for n in 2..=16 {
            let tree = tree_of_size(n);
            let participants = 2 * tree.tree_edge_count() + 1;
            let (_, reduction) = reduce(&tree, round_count(participants)).unwrap();
            assert!(reduction
                .successors
                .iter()
                .all(|&successor| successor == reduction.terminus));
        }
    }
}
