//! Pure graph algorithms for the distributed preorder computation.
//!
//! This crate is the I/O-free half of the pipeline; the `preorder-engine`
//! runtime does all the messaging and calls into the functions here.
//!
//! # Algorithm overview
//!
//! ```text
//! level-order array
//!       │
//!       ▼
//! build_graph ──► EdgeTable + Adjacency        (2(n−1) directed edges)
//!       │
//!       ▼
//! tour_successor per edge ──► next: EdgeId → EdgeId   (single closed walk)
//!       │
//!       ▼
//! fix_up ──► terminus (last edge into the root) points to itself,
//!            making it the unique fixed point of the successor function
//!       │
//!       ▼
//! pointer-jumping suffix sum over the successor graph
//!       │                      (forward edges weigh 1, reverse 0)
//!       ▼
//! preorder_position = n − weight  per forward edge
//! ```
//!
//! The [`sequential`] module runs the same reduction synchronously on a single
//! thread; it is the deterministic reference the distributed engine is tested
//! against.

mod build;
mod error;
mod euler;
mod schedule;
pub mod sequential;

pub use build::build_graph;
pub use error::TourError;
pub use euler::{edge_direction, fix_up, pointed_at, terminus_edge, tour_successor};
pub use schedule::{
    next_notice_bound, preorder_position, round_count, INITIAL_NOTICE_BOUND,
};
