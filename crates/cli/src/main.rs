//! Preorder CLI
//!
//! Computes the preorder traversal of a binary tree given in level-order
//! array form, running the distributed Euler-tour suffix-sum engine.
//!
//! # Example
//!
//! ```bash
//! # Root A with children B and C; B has children D and E
//! preorder ABCDE
//! # prints: ABDEC
//!
//! # Logging via RUST_LOG, e.g. per-round barrier activity
//! RUST_LOG=preorder_engine=debug preorder ABCDEFG
//! ```

use clap::Parser;
use preorder_engine::{run_preorder, EngineError};
use preorder_types::{LevelOrderTree, TreeError};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Preorder traversal of a level-order encoded binary tree.
///
/// The input is one symbol per node, root first; the node at 1-indexed
/// position i has its children at positions 2i and 2i+1.
#[derive(Parser, Debug)]
#[command(name = "preorder")]
#[command(version, about, long_about = None)]
struct Args {
    /// Level-order encoding of the tree, e.g. "ABCDE".
    tree: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

async fn run(input: &str) -> Result<String, CliError> {
    let tree = LevelOrderTree::parse(input)?;
    let order = run_preorder(&tree).await?;
    Ok(order.into_iter().map(|label| label.0).collect())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args.tree).await {
        Ok(order) => println!("{order}"),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
