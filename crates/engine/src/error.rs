//! Errors from the distributed runtime.

use preorder_tour::TourError;
use preorder_types::EdgeId;
use thiserror::Error;

/// Errors aborting a run.
///
/// There is no partial failure: every variant here ends the whole
/// computation. Message channels are assumed reliable and ordered, so a
/// closed channel means another participant already tore down.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Fatal adjacency lookup failure (malformed table or logic defect).
    #[error(transparent)]
    Tour(#[from] TourError),

    /// A worker reported a failure; the coordinator aborted the run.
    #[error("Worker for {edge} failed: {reason}")]
    Worker { edge: EdgeId, reason: String },

    /// The mailbox of `to` is gone; the run is tearing down.
    #[error("Mailbox of {to} is closed")]
    MailboxClosed { to: EdgeId },

    /// The coordinator is gone; the run is tearing down.
    #[error("Coordinator channel closed")]
    CoordinatorClosed,

    /// A message arrived that the protocol does not allow in this phase.
    #[error("Unexpected {message} message during {phase} phase")]
    UnexpectedMessage {
        message: &'static str,
        phase: &'static str,
    },

    /// An internal protocol invariant was violated.
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// A spawned task panicked.
    #[error("Task failed: {0}")]
    Task(String),
}
