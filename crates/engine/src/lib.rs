//! Distributed preorder runtime.
//!
//! One tokio task per directed tree edge plus a coordinator task, advancing
//! through globally synchronized rounds (bulk-synchronous, not free-running):
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         run_preorder                             │
//! │                  (orchestrator - main task)                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │   ┌───────────┐   ┌───────────┐   ┌───────────┐                  │
//! │   │ Worker e1 │   │ Worker e2 │   │ Worker e3 │  ...one per edge │
//! │   │ successor │◄─►│ successor │◄─►│ successor │                  │
//! │   │ weight    │   │ weight    │   │ weight    │                  │
//! │   └─────┬─────┘   └─────┬─────┘   └─────┬─────┘                  │
//! │         │   value requests/replies      │                        │
//! │         │   via EdgeRegistry mailboxes  │                        │
//! │         └───────────────┬───────────────┘                        │
//! │                         │ successor reports                      │
//! │                ┌────────▼────────┐                               │
//! │                │   Coordinator   │  liveness barrier each round, │
//! │                │                 │  tour fix-up, final assembly  │
//! │                └─────────────────┘                               │
//! │                                                                  │
//! │          Arc<Adjacency>: read-only, shared by every worker       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Phases: every worker derives its Euler-tour successor locally from the
//! shared adjacency and reports it; the coordinator fixes up the terminus and
//! hands back the corrected successor plus the initial sleep flag; then
//! `ceil(log2(participants))` pointer-jumping rounds run, each closed by the
//! coordinator's stay-awake/sleep reply acting as the barrier; finally the
//! forward-edge workers report their preorder positions and the coordinator
//! assembles the sequence.
//!
//! There is no retry or timeout anywhere: the computation is single-shot, and
//! any participant failure aborts the whole run (the coordinator broadcasts
//! shutdown and surfaces the error).

mod config;
mod coordinator;
mod error;
mod message;
mod registry;
mod runner;
mod worker;

pub use config::EngineConfig;
pub use error::EngineError;
pub use runner::{run_preorder, run_preorder_with};
