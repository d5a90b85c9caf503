//! Edge-id addressed delivery.

use crate::message::WorkerMsg;
use crate::EngineError;
use preorder_types::EdgeId;
use std::collections::HashMap;
use tokio::sync::mpsc;

/// Maps logical edge identity to the mailbox of the task executing it.
///
/// Edge ids are data; which task owns an edge is this table's business. The
/// registry is built once by the orchestrator and shared read-only (`Arc`)
/// by the coordinator and every worker.
#[derive(Debug)]
pub struct EdgeRegistry {
    senders: HashMap<EdgeId, mpsc::UnboundedSender<WorkerMsg>>,
}

impl EdgeRegistry {
    /// Build the registry from one sender per edge.
    pub fn new(senders: HashMap<EdgeId, mpsc::UnboundedSender<WorkerMsg>>) -> Self {
        Self { senders }
    }

    /// Deliver a message to the worker owning `to`.
    ///
    /// Fails only when that worker's mailbox is gone, which happens during
    /// teardown of an already-aborted run.
    pub fn send(&self, to: EdgeId, msg: WorkerMsg) -> Result<(), EngineError> {
        let sender = self
            .senders
            .get(&to)
            .ok_or(EngineError::MailboxClosed { to })?;
        sender
            .send(msg)
            .map_err(|_| EngineError::MailboxClosed { to })
    }

    /// Deliver a message to every worker, ignoring already-closed mailboxes.
    /// Used for the shutdown broadcast on the abort path.
    pub fn broadcast(&self, msg: WorkerMsg) {
        for sender in self.senders.values() {
            let _ = sender.send(msg.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_to_unknown_edge_fails() {
        let registry = EdgeRegistry::new(HashMap::new());
        assert_eq!(
            registry.send(EdgeId(1), WorkerMsg::Shutdown),
            Err(EngineError::MailboxClosed { to: EdgeId(1) })
        );
    }

    #[test]
    fn test_send_delivers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let registry = EdgeRegistry::new(HashMap::from([(EdgeId(1), tx)]));

        registry
            .send(EdgeId(1), WorkerMsg::ValueRequest { from: EdgeId(2) })
            .unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(WorkerMsg::ValueRequest { from: EdgeId(2) })
        ));
    }
}
