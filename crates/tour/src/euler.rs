//! Euler tour successor function and its fix-up.

use crate::TourError;
use preorder_types::{Adjacency, EdgeDirection, EdgeId, EdgeTable, NodeLabel};

/// Compute the id of the edge following `edge` in the Euler tour.
///
/// The continuation rule: take `edge`'s reverse partner, find that partner's
/// own entry in the adjacency list of `edge`'s end node, and continue with the
/// entry after it, wrapping to the head of the list. Applying this repeatedly
/// from any edge traces one closed walk covering every directed edge exactly
/// once.
///
/// Pure function of the (immutable) adjacency table; re-deriving the successor
/// always yields the same value.
pub fn tour_successor(edge: EdgeId, adjacency: &Adjacency) -> Result<EdgeId, TourError> {
    let reverse = adjacency
        .iter()
        .find(|entry| entry.forward_id == edge)
        .map(|entry| entry.reverse_id)
        .ok_or(TourError::EdgeNotFound(edge))?;

    for list in adjacency.lists() {
        if let Some(at) = list.iter().position(|entry| entry.forward_id == reverse) {
            let next = if at + 1 < list.len() {
                &list[at + 1]
            } else {
                &list[0]
            };
            return Ok(next.forward_id);
        }
    }
    Err(TourError::ReversePartnerNotFound { edge, reverse })
}

/// Classify an edge as forward (parent→child) or reverse (child→parent).
pub fn edge_direction(edge: EdgeId, adjacency: &Adjacency) -> Result<EdgeDirection, TourError> {
    adjacency
        .direction_of(edge)
        .ok_or(TourError::EdgeNotFound(edge))
}

/// Locate the terminus edge: the last edge in creation order whose end node
/// is the root. Only the coordinator knows the true root label, so only it
/// can perform this step.
pub fn terminus_edge(edges: &EdgeTable, root: NodeLabel) -> Result<EdgeId, TourError> {
    edges
        .last_ending_at(root)
        .ok_or(TourError::NoTerminus(root.0))
}

/// Redefine the terminus edge to point to itself, breaking the tour cycle
/// into a chain with a unique fixed point. The fixed point is the neutral
/// anchor of the suffix-sum reduction.
pub fn fix_up(successors: &mut [EdgeId], terminus: EdgeId) {
    successors[terminus.index()] = terminus;
}

/// For each edge, whether any edge's successor points at it (the terminus
/// self-pointer counts). An edge nobody points at receives no value request
/// in the first round and starts asleep; after the fix-up exactly one such
/// edge exists, the terminus's former successor.
pub fn pointed_at(successors: &[EdgeId]) -> Vec<bool> {
    let mut pointed = vec![false; successors.len()];
    for successor in successors {
        pointed[successor.index()] = true;
    }
    pointed
}
