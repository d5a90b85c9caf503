//! Orchestration of a single run.

use crate::coordinator::Coordinator;
use crate::registry::EdgeRegistry;
use crate::worker::WorkerTask;
use crate::{EngineConfig, EngineError};
use preorder_tour as tour;
use preorder_types::{LevelOrderTree, NodeLabel};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Compute the preorder sequence of `tree` with the default configuration.
pub async fn run_preorder(tree: &LevelOrderTree) -> Result<Vec<NodeLabel>, EngineError> {
    run_preorder_with(tree, EngineConfig::default()).await
}

/// Compute the preorder sequence of `tree`.
///
/// Builds the edge set and adjacency, spawns one worker task per directed
/// edge plus the coordinator, and joins them all. The single-node tree
/// short-circuits before any task is spawned.
pub async fn run_preorder_with(
    tree: &LevelOrderTree,
    config: EngineConfig,
) -> Result<Vec<NodeLabel>, EngineError> {
    if tree.is_single() {
        return Ok(vec![tree.root()]);
    }

    let (edges, adjacency) = tour::build_graph(tree);
    let adjacency = Arc::new(adjacency);

    // One process per directed edge, plus the coordinator.
    let participants = edges.len() + 1;
    let rounds = tour::round_count(participants) + config.extra_rounds;
    debug!(
        nodes = tree.len(),
        edge_count = edges.len(),
        participants,
        rounds,
        "starting preorder run"
    );

    let (coordinator_tx, coordinator_rx) = mpsc::unbounded_channel();
    let mut inboxes = Vec::with_capacity(edges.len());
    let mut senders = HashMap::with_capacity(edges.len());
    for edge in edges.iter() {
        let (tx, rx) = mpsc::unbounded_channel();
        senders.insert(edge.id, tx);
        inboxes.push((edge.id, rx));
    }
    let registry = Arc::new(EdgeRegistry::new(senders));

    let worker_handles: Vec<_> = inboxes
        .into_iter()
        .map(|(edge, inbox)| {
            let worker = WorkerTask {
                edge,
                adjacency: Arc::clone(&adjacency),
                inbox,
                registry: Arc::clone(&registry),
                coordinator: coordinator_tx.clone(),
                rounds,
                participants,
                node_count: tree.len(),
            };
            tokio::spawn(worker.run())
        })
        .collect();
    drop(coordinator_tx);

    let coordinator = Coordinator {
        root: tree.root(),
        node_count: tree.len(),
        edges,
        inbox: coordinator_rx,
        registry: Arc::clone(&registry),
        rounds,
    };
    let coordinator_handle = tokio::spawn(coordinator.run());

    let mut outcome = match coordinator_handle.await {
        Ok(result) => result,
        Err(join_error) => Err(EngineError::Task(join_error.to_string())),
    };
    for handle in worker_handles {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(worker_error)) => {
                if outcome.is_ok() {
                    outcome = Err(worker_error);
                }
            }
            Err(join_error) => {
                if outcome.is_ok() {
                    outcome = Err(EngineError::Task(join_error.to_string()));
                }
            }
        }
    }
    outcome
}
