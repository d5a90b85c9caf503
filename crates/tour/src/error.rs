//! Lookup-failure taxonomy.

use preorder_types::EdgeId;
use thiserror::Error;

/// Fatal adjacency lookup failures.
///
/// These indicate a malformed adjacency table or a logic defect; there is no
/// recovery, the whole computation aborts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("Edge {0} not found in adjacency table")]
    EdgeNotFound(EdgeId),
    #[error("Reverse partner {reverse} of edge {edge} not found in adjacency table")]
    ReversePartnerNotFound { edge: EdgeId, reverse: EdgeId },
    #[error("No edge ends at root '{0}'")]
    NoTerminus(char),
}
