//! Per-edge worker task.

use crate::message::{CoordinatorMsg, WorkerMsg};
use crate::registry::EdgeRegistry;
use crate::EngineError;
use preorder_tour as tour;
use preorder_types::{Adjacency, EdgeId};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

/// A worker owning one directed edge.
///
/// The worker derives its direction and Euler-tour successor locally from the
/// shared adjacency, then participates in the fixed number of suffix-sum
/// rounds, and finally (forward edges only) reports its preorder position.
/// Its mutable state (`successor`, `weight`, `asleep`) is exclusively owned
/// here and committed only after each round's barrier.
pub struct WorkerTask {
    /// The owned edge.
    pub edge: EdgeId,
    /// Read-only adjacency shared by all workers.
    pub adjacency: Arc<Adjacency>,
    /// This worker's mailbox.
    pub inbox: mpsc::UnboundedReceiver<WorkerMsg>,
    /// Edge-id addressed delivery to the other workers.
    pub registry: Arc<EdgeRegistry>,
    /// Reports to the coordinator.
    pub coordinator: mpsc::UnboundedSender<CoordinatorMsg>,
    /// Fixed number of suffix-sum rounds.
    pub rounds: u32,
    /// Total process count (edges + coordinator); sizes the terminus answer
    /// bound.
    pub participants: usize,
    /// Total node count; converts weight to preorder position.
    pub node_count: usize,
}

/// Outcome of one receive loop: the successor's round-start values.
struct ReceivedValue {
    weight: u32,
    successor: EdgeId,
}

/// The worker was told to shut down mid-protocol.
struct ShutDown;

impl WorkerTask {
    /// Run the worker to completion.
    ///
    /// Any fatal error is also reported to the coordinator so it can abort
    /// the run instead of waiting forever for this worker's messages.
    pub async fn run(mut self) -> Result<(), EngineError> {
        let result = self.run_phases().await;
        if let Err(error) = &result {
            let _ = self.coordinator.send(CoordinatorMsg::Failed {
                edge: self.edge,
                reason: error.to_string(),
            });
        }
        result
    }

    async fn run_phases(&mut self) -> Result<(), EngineError> {
        // Euler tour: pure lookups in the shared adjacency, no communication.
        let direction = tour::edge_direction(self.edge, &self.adjacency)?;
        let computed = tour::tour_successor(self.edge, &self.adjacency)?;
        self.send_to_coordinator(CoordinatorMsg::TourComputed {
            edge: self.edge,
            successor: computed,
        })?;

        // Value requests that overtake a coordinator reply. The coordinator
        // fans replies out one mailbox at a time and cross-sender delivery is
        // unordered, so a predecessor can receive its reply, enter the next
        // phase, and request this worker's values before this worker's own
        // reply arrives. Such requests belong to the next round; they are
        // parked here and answered once the round's start values are
        // committed.
        let mut early_requests: VecDeque<EdgeId> = VecDeque::new();

        // Only the coordinator knows the root, so the terminus fix-up comes
        // back from it; for every other edge the successor is unchanged.
        let (mut successor, mut asleep) = loop {
            match self.recv().await? {
                WorkerMsg::TourFixed { successor, asleep } => break (successor, asleep),
                WorkerMsg::ValueRequest { from } => early_requests.push_back(from),
                WorkerMsg::Shutdown => return Ok(()),
                other => return Err(unexpected(&other, "tour")),
            }
        };

        let is_terminus = successor == self.edge;
        let mut weight: u32 = if is_terminus {
            // Neutral element: the suffix sum measures the path to the
            // terminus, not including it.
            0
        } else {
            u32::from(direction.is_forward())
        };
        let mut notice_bound = tour::INITIAL_NOTICE_BOUND;

        trace!(
            edge = %self.edge,
            %successor,
            forward = direction.is_forward(),
            is_terminus,
            asleep,
            "worker initialized"
        );

        for round in 0..self.rounds {
            // Every worker requests its successor's values each round, the
            // sleeping ones included: sleep means nobody needs this worker's
            // value anymore, but its own suffix may still be accumulating.
            // The terminus requests itself; that request is one of the ones
            // it answers below.
            self.registry
                .send(successor, WorkerMsg::ValueRequest { from: self.edge })?;

            // How many requests must be answered before this round can end.
            // An awake non-terminus edge has exactly one predecessor; the
            // terminus accumulates predecessors on the doubling schedule.
            let expected_requests = if is_terminus {
                notice_bound
            } else if !asleep {
                1
            } else {
                0
            };

            let received = match self
                .exchange_values(weight, successor, expected_requests, &mut early_requests)
                .await?
            {
                Ok(received) => received,
                Err(ShutDown) => return Ok(()),
            };

            // Report the new successor, then block on the coordinator's
            // liveness reply. The reply is the round barrier: committing the
            // update only after it guarantees every answer sent above carried
            // round-start values.
            self.send_to_coordinator(CoordinatorMsg::SuccessorReport {
                edge: self.edge,
                successor: received.successor,
            })?;
            let outcome = loop {
                match self.recv().await? {
                    WorkerMsg::RoundOutcome { asleep } => break asleep,
                    WorkerMsg::ValueRequest { from } => early_requests.push_back(from),
                    WorkerMsg::Shutdown => return Ok(()),
                    other => return Err(unexpected(&other, "barrier")),
                }
            };

            weight += received.weight;
            successor = received.successor;
            asleep = outcome;
            if is_terminus {
                notice_bound = tour::next_notice_bound(notice_bound, self.participants);
            }

            trace!(edge = %self.edge, round, weight, %successor, asleep, "round committed");
        }

        // Only forward edges resolve a node: the edge's end node gets
        // position n − weight among the non-root nodes.
        if direction.is_forward() {
            let position = tour::preorder_position(weight, self.node_count);
            self.send_to_coordinator(CoordinatorMsg::PreorderReport {
                edge: self.edge,
                position,
            })?;
        }
        Ok(())
    }

    /// One round's worth of value traffic: wait for the successor's reply
    /// while answering exactly `expected_requests` requests with the current
    /// (round-start) values. Requests parked during the previous wait belong
    /// to this round and are answered first.
    async fn exchange_values(
        &mut self,
        weight: u32,
        successor: EdgeId,
        expected_requests: usize,
        early_requests: &mut VecDeque<EdgeId>,
    ) -> Result<Result<ReceivedValue, ShutDown>, EngineError> {
        let mut received: Option<ReceivedValue> = None;
        let mut answered = 0;
        while let Some(from) = early_requests.pop_front() {
            self.registry
                .send(from, WorkerMsg::ValueReply { weight, successor })?;
            answered += 1;
        }
        loop {
            if answered >= expected_requests {
                if let Some(value) = received.take() {
                    return Ok(Ok(value));
                }
            }
            match self.recv().await? {
                WorkerMsg::ValueRequest { from } => {
                    self.registry
                        .send(from, WorkerMsg::ValueReply { weight, successor })?;
                    answered += 1;
                }
                WorkerMsg::ValueReply {
                    weight: successor_weight,
                    successor: next_successor,
                } => {
                    received = Some(ReceivedValue {
                        weight: successor_weight,
                        successor: next_successor,
                    });
                }
                WorkerMsg::Shutdown => return Ok(Err(ShutDown)),
                other => return Err(unexpected(&other, "suffix-sum")),
            }
        }
    }

    async fn recv(&mut self) -> Result<WorkerMsg, EngineError> {
        // The registry keeps a sender for every worker alive, so a closed
        // mailbox can only mean full teardown.
        self.inbox
            .recv()
            .await
            .ok_or(EngineError::MailboxClosed { to: self.edge })
    }

    fn send_to_coordinator(&self, msg: CoordinatorMsg) -> Result<(), EngineError> {
        self.coordinator
            .send(msg)
            .map_err(|_| EngineError::CoordinatorClosed)
    }
}

fn unexpected(msg: &WorkerMsg, phase: &'static str) -> EngineError {
    EngineError::UnexpectedMessage {
        message: msg.type_name(),
        phase,
    }
}
