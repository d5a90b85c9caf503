//! Core types for the distributed preorder computation.
//!
//! This crate provides the shared vocabulary of the pipeline:
//!
//! - [`LevelOrderTree`]: the validated input array (children of 1-indexed
//!   position `i` live at `2i` and `2i + 1`)
//! - [`Edge`] / [`EdgeTable`]: directed edges, two per tree edge (forward
//!   parent→child and reverse child→parent), identified by creation order
//! - [`AdjacencyEntry`] / [`Adjacency`]: per-node edge lists whose entry
//!   ordering drives the Euler tour
//!
//! Everything here is built once by the coordinator and immutable afterwards;
//! the algorithms that consume these types live in `preorder-tour`, the
//! runtime in `preorder-engine`.

mod adjacency;
mod edge;
mod tree;

pub use adjacency::{Adjacency, AdjacencyEntry};
pub use edge::{Edge, EdgeDirection, EdgeId, EdgeTable};
pub use tree::{LevelOrderTree, NodeLabel, TreeError};
