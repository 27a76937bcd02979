//! Query system for word-adjacency graphs
//!
//! All queries are read-only consumers of a built [`WordGraph`](crate::WordGraph):
//! bridge-word lookup, bridge-word text augmentation, weighted
//! shortest path, PageRank scoring, and randomized traversal.

mod augment;
mod bridge;
mod path;
mod rank;
mod types;
mod walk;

pub use augment::augment;
pub use bridge::BridgeQuery;
pub use path::PathQuery;
pub use rank::{page_rank, page_ranks, DAMPING, ITERATIONS};
pub use types::{BridgeResult, PathResult, WalkResult};
pub use walk::random_walk;
