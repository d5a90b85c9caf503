//! Round and answer-bound scheduling for the suffix-sum engine.

/// Requests the terminus edge must answer in the first round: its tour
/// predecessor plus its own self-request.
pub const INITIAL_NOTICE_BOUND: usize = 2;

/// Number of pointer-jumping rounds for a computation with `participants`
/// processes (one per directed edge, plus the coordinator).
///
/// `ceil(log2(participants))` rounds advance every pointer past the longest
/// possible chain to the terminus, which is bounded by the edge count.
pub fn round_count(participants: usize) -> u32 {
    participants.next_power_of_two().trailing_zeros()
}

/// Advance the terminus answer bound after a round.
///
/// As the chain folds, the predecessors accumulated at the terminus double
/// minus one each round (every converged pointer stays, and as many again
/// arrive, minus the one slot its own self-request already occupies), capped
/// at `participants − 1` once every edge points at the terminus.
pub fn next_notice_bound(bound: usize, participants: usize) -> usize {
    (2 * bound - 1).min(participants - 1)
}

/// Preorder rank derived from a forward edge's converged weight, counted
/// among the non-root nodes. The root is not the end node of any forward
/// edge and is emitted first by construction.
pub fn preorder_position(weight: u32, node_count: usize) -> u32 {
    node_count as u32 - weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_count() {
        assert_eq!(round_count(3), 2);
        assert_eq!(round_count(4), 2);
        assert_eq!(round_count(5), 3);
        assert_eq!(round_count(9), 4);
        assert_eq!(round_count(33), 6);
    }

    #[test]
    fn test_notice_bound_doubles_minus_one_up_to_cap() {
        // 13 participants: 12 edges, bound saturates at 12.
        let participants = 13;
        let mut bound = INITIAL_NOTICE_BOUND;
        let mut schedule = vec![bound];
        for _ in 0..4 {
            bound = next_notice_bound(bound, participants);
            schedule.push(bound);
        }
        assert_eq!(schedule, vec![2, 3, 5, 9, 12]);
    }

    #[test]
    fn test_notice_bound_matches_terminus_arrivals() {
        // Round k of an E-edge run delivers min(2^k + 1, E) requests to the
        // terminus: every edge within 2^k steps, plus the self-request.
        for edge_count in [2usize, 4, 6, 8, 12, 30] {
            let participants = edge_count + 1;
            let mut bound = INITIAL_NOTICE_BOUND;
            for k in 0..round_count(participants) {
                let arrivals = (2usize.pow(k) + 1).min(edge_count);
                assert_eq!(bound, arrivals, "edges {edge_count}, round {k}");
                bound = next_notice_bound(bound, participants);
            }
        }
    }

    #[test]
    fn test_preorder_position() {
        // 5-node tree: the edge into the root's first child carries the full
        // forward count and lands at position 1 (right after the root).
        assert_eq!(preorder_position(4, 5), 1);
        assert_eq!(preorder_position(1, 5), 4);
    }
}
