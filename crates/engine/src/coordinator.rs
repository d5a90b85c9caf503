//! Coordinator task.

use crate::message::{CoordinatorMsg, WorkerMsg};
use crate::registry::EdgeRegistry;
use crate::EngineError;
use preorder_tour as tour;
use preorder_types::{EdgeId, EdgeTable, NodeLabel};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// The coordinator: sole holder of the root label and the edge table, sole
/// arbiter of global sleep state, and the round barrier.
///
/// It distributes the tour fix-up, aggregates every round's successor reports
/// into stay-awake/sleep replies, and assembles the final preorder sequence
/// from the forward-edge reports. On any failure it broadcasts shutdown so no
/// worker is left blocked on a message that will never come.
pub struct Coordinator {
    /// Root label, known only here.
    pub root: NodeLabel,
    /// Total node count.
    pub node_count: usize,
    /// Immutable edge table; maps reported edge ids back to end-node labels.
    pub edges: EdgeTable,
    /// Reports from all workers.
    pub inbox: mpsc::UnboundedReceiver<CoordinatorMsg>,
    /// Delivery to worker mailboxes.
    pub registry: Arc<EdgeRegistry>,
    /// Fixed number of suffix-sum rounds.
    pub rounds: u32,
}

impl Coordinator {
    /// Run the coordinator to completion, returning the preorder sequence.
    pub async fn run(mut self) -> Result<Vec<NodeLabel>, EngineError> {
        let result = self.run_phases().await;
        if result.is_err() {
            self.registry.broadcast(WorkerMsg::Shutdown);
        }
        result
    }

    async fn run_phases(&mut self) -> Result<Vec<NodeLabel>, EngineError> {
        let edge_count = self.edges.len();

        // Collect every worker's locally computed tour successor.
        let mut reported: Vec<Option<EdgeId>> = vec![None; edge_count];
        for _ in 0..edge_count {
            match self.recv().await? {
                CoordinatorMsg::TourComputed { edge, successor } => {
                    reported[edge.index()] = Some(successor);
                }
                CoordinatorMsg::Failed { edge, reason } => {
                    return Err(EngineError::Worker { edge, reason });
                }
                other => return Err(unexpected(&other, "tour")),
            }
        }
        let mut successors: Vec<EdgeId> = reported
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| EngineError::Protocol("duplicate tour report".into()))?;

        // Fix-up: the last edge into the root becomes the tour's unique
        // fixed point. Distribute the corrected successor together with the
        // initial liveness (the terminus's former successor starts asleep,
        // nobody points at it anymore).
        let terminus = tour::terminus_edge(&self.edges, self.root)?;
        tour::fix_up(&mut successors, terminus);
        let pointed = tour::pointed_at(&successors);
        for (index, successor) in successors.iter().enumerate() {
            self.registry.send(
                EdgeId(index as u32 + 1),
                WorkerMsg::TourFixed {
                    successor: *successor,
                    asleep: !pointed[index],
                },
            )?;
        }
        debug!(%terminus, edge_count, "euler tour fixed and distributed");

        // Liveness barrier for each round: collect every worker's new
        // successor, then tell each worker whether anyone still points at
        // it. No worker starts the next round before its reply, which keeps
        // reads of round-start values from racing the updates they feed.
        for round in 0..self.rounds {
            let mut pointed = vec![false; edge_count];
            let mut reported = vec![false; edge_count];
            for _ in 0..edge_count {
                match self.recv().await? {
                    CoordinatorMsg::SuccessorReport { edge, successor } => {
                        if std::mem::replace(&mut reported[edge.index()], true) {
                            return Err(EngineError::Protocol(format!(
                                "duplicate successor report from {edge}"
                            )));
                        }
                        pointed[successor.index()] = true;
                    }
                    CoordinatorMsg::Failed { edge, reason } => {
                        return Err(EngineError::Worker { edge, reason });
                    }
                    other => return Err(unexpected(&other, "suffix-sum")),
                }
            }
            let awake = pointed.iter().filter(|&&p| p).count();
            for (index, &pointed) in pointed.iter().enumerate() {
                self.registry.send(
                    EdgeId(index as u32 + 1),
                    WorkerMsg::RoundOutcome { asleep: !pointed },
                )?;
            }
            debug!(round, awake, "barrier released");
        }

        // One report per non-root node, from the forward-edge workers.
        let forward_count = self.node_count - 1;
        let mut by_position: Vec<Option<NodeLabel>> = vec![None; forward_count];
        for _ in 0..forward_count {
            match self.recv().await? {
                CoordinatorMsg::PreorderReport { edge, position } => {
                    let label = self.edges.get(edge).end;
                    let slot = (position as usize)
                        .checked_sub(1)
                        .filter(|&slot| slot < forward_count)
                        .ok_or_else(|| {
                            EngineError::Protocol(format!(
                                "preorder position {position} for {edge} out of range"
                            ))
                        })?;
                    if by_position[slot].replace(label).is_some() {
                        return Err(EngineError::Protocol(format!(
                            "preorder position {position} reported twice"
                        )));
                    }
                }
                CoordinatorMsg::Failed { edge, reason } => {
                    return Err(EngineError::Worker { edge, reason });
                }
                other => return Err(unexpected(&other, "preorder")),
            }
        }

        // The root is the traversal origin, not the end node of any forward
        // edge; it takes the first slot by construction.
        let mut order = Vec::with_capacity(self.node_count);
        order.push(self.root);
        for label in by_position {
            order.push(label.ok_or_else(|| {
                EngineError::Protocol("missing preorder position".into())
            })?);
        }
        debug!(order = %order.iter().map(|l| l.0).collect::<String>(), "preorder assembled");
        Ok(order)
    }

    async fn recv(&mut self) -> Result<CoordinatorMsg, EngineError> {
        self.inbox
            .recv()
            .await
            .ok_or(EngineError::CoordinatorClosed)
    }
}

fn unexpected(msg: &CoordinatorMsg, phase: &'static str) -> EngineError {
    EngineError::UnexpectedMessage {
        message: msg.type_name(),
        phase,
    }
}
