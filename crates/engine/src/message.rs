//! Messages exchanged between workers and the coordinator.
//!
//! All channels are in-process unbounded mpsc mailboxes, so sends never
//! block; every suspension point in the protocol is a receive.

use preorder_types::EdgeId;

/// Messages delivered to a worker's mailbox.
#[derive(Debug, Clone)]
pub enum WorkerMsg {
    /// Coordinator reply to the worker's computed tour successor: the
    /// fixed-up successor (changed only for the terminus edge) and whether
    /// the worker starts asleep (no edge points at it).
    TourFixed { successor: EdgeId, asleep: bool },

    /// Another worker asks for this worker's current `(weight, successor)`.
    ValueRequest { from: EdgeId },

    /// Answer to a [`WorkerMsg::ValueRequest`], carrying the answerer's
    /// round-start values.
    ValueReply { weight: u32, successor: EdgeId },

    /// Coordinator barrier reply closing a round: whether the worker may go
    /// to sleep because no edge points at it anymore.
    RoundOutcome { asleep: bool },

    /// The run is aborting; unwind immediately.
    Shutdown,
}

impl WorkerMsg {
    /// Human-readable name for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkerMsg::TourFixed { .. } => "TourFixed",
            WorkerMsg::ValueRequest { .. } => "ValueRequest",
            WorkerMsg::ValueReply { .. } => "ValueReply",
            WorkerMsg::RoundOutcome { .. } => "RoundOutcome",
            WorkerMsg::Shutdown => "Shutdown",
        }
    }
}

/// Messages delivered to the coordinator.
#[derive(Debug, Clone)]
pub enum CoordinatorMsg {
    /// A worker's locally computed Euler-tour successor.
    TourComputed { edge: EdgeId, successor: EdgeId },

    /// A worker's updated successor at the end of a round. The coordinator
    /// aggregates these into the stay-awake set before releasing the barrier.
    SuccessorReport { edge: EdgeId, successor: EdgeId },

    /// A forward-edge worker's final preorder position.
    PreorderReport { edge: EdgeId, position: u32 },

    /// A worker hit a fatal error; abort the run.
    Failed { edge: EdgeId, reason: String },
}

impl CoordinatorMsg {
    /// Human-readable name for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            CoordinatorMsg::TourComputed { .. } => "TourComputed",
            CoordinatorMsg::SuccessorReport { .. } => "SuccessorReport",
            CoordinatorMsg::PreorderReport { .. } => "PreorderReport",
            CoordinatorMsg::Failed { .. } => "Failed",
        }
    }
}
