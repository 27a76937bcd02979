//! Wordgraph: Weighted Word-Adjacency Graph Engine
//!
//! Turns a plain-text corpus into a directed graph whose nodes are
//! lowercased words and whose edge weights count how often one word
//! immediately followed another. Five read-only queries run over the
//! built graph: bridge-word lookup, bridge-word text augmentation,
//! weighted shortest path, PageRank scoring, and randomized
//! edge-disjoint traversal.
//!
//! # Core Concepts
//!
//! - **Words**: interned as dense `WordId` indices into an arena
//! - **Edges**: adjacency-count weights, one edge per `(u, v)` pair
//! - **Build once, query forever**: the graph is immutable after
//!   construction, so all queries take `&WordGraph` and are safe to
//!   run concurrently
//!
//! # Example
//!
//! ```
//! use wordgraph::{BridgeQuery, BridgeResult, GraphBuilder};
//!
//! let graph = GraphBuilder::from_text("the quick fox and the lazy fox");
//! let result = BridgeQuery::between("the", "fox").execute(&graph);
//! assert!(matches!(result, BridgeResult::Bridges { .. }));
//! ```

mod error;
mod graph;
pub mod query;
pub mod text;

pub use error::{GraphError, Result};
pub use graph::{EdgeView, GraphBuilder, WordGraph, WordId};
pub use query::{
    augment, page_rank, page_ranks, random_walk, BridgeQuery, BridgeResult, PathQuery, PathResult,
    WalkResult,
};
pub use text::normalize;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
