//! Query result types
//!
//! Expected outcomes (`NoSuchWord`, `NoBridge`, `NoPath`, `EmptyGraph`)
//! are variants here, never errors: they are answers the caller asked
//! for. `Display` renders the literal CLI message templates.

use serde::Serialize;
use std::fmt;

/// Result of a bridge-word lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BridgeResult {
    /// One or both query words are absent from the vocabulary
    NoSuchWord,
    /// Both words exist but no intermediate connects them
    NoBridge { from: String, to: String },
    /// Bridge words, in ascending lexicographic order
    Bridges {
        from: String,
        to: String,
        words: Vec<String>,
    },
}

impl fmt::Display for BridgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeResult::NoSuchWord => write!(f, "No word1 or word2 in the graph!"),
            BridgeResult::NoBridge { from, to } => {
                write!(f, "No bridge words from {} to {}!", from, to)
            }
            BridgeResult::Bridges { from, to, words } => write!(
                f,
                "The bridge words from {} to {} are: {}.",
                from,
                to,
                words.join(", ")
            ),
        }
    }
}

/// Result of a weighted shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PathResult {
    /// One or both endpoints are absent from the vocabulary
    NoSuchWord,
    /// Both endpoints exist but no directed route connects them
    NoPath { from: String, to: String },
    /// The cheapest path and its total weight
    Path { words: Vec<String>, cost: u64 },
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathResult::NoSuchWord => write!(f, "One or both words not in graph."),
            PathResult::NoPath { from, to } => write!(f, "No path from {} to {}", from, to),
            PathResult::Path { words, cost } => {
                write!(f, "Path: {} (cost={})", words.join(" -> "), cost)
            }
        }
    }
}

/// Result of a random walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum WalkResult {
    /// The graph has no nodes to start from
    EmptyGraph,
    /// Visited words, in traversal order
    Walk { words: Vec<String> },
}

impl fmt::Display for WalkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkResult::EmptyGraph => write!(f, "Graph empty."),
            WalkResult::Walk { words } => write!(f, "{}", words.join(" -> ")),
        }
    }
}
