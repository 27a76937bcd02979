//! Weighted shortest paths (Dijkstra)

use super::types::PathResult;
use crate::graph::{WordGraph, WordId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::trace;

/// Query for the cheapest directed route between two words
///
/// Edge weights are adjacency counts, so all weights are positive and
/// Dijkstra applies. Ties in distance break on the smaller interned
/// `WordId` via the heap ordering; any consistent order is acceptable.
#[derive(Debug, Clone)]
pub struct PathQuery {
    from: String,
    to: String,
}

impl PathQuery {
    /// Create a path query between two words (lowercased on entry)
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into().to_lowercase(),
            to: to.into().to_lowercase(),
        }
    }

    /// Execute the query against a graph
    pub fn execute(&self, graph: &WordGraph) -> PathResult {
        let (Some(src), Some(dst)) = (graph.word_id(&self.from), graph.word_id(&self.to)) else {
            return PathResult::NoSuchWord;
        };

        let n = graph.node_count();
        let mut dist: Vec<u64> = vec![u64::MAX; n];
        let mut prev: Vec<Option<WordId>> = vec![None; n];
        let mut heap: BinaryHeap<Reverse<(u64, WordId)>> = BinaryHeap::new();

        dist[src.index()] = 0;
        heap.push(Reverse((0, src)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u.index()] {
                continue; // stale entry
            }
            if u == dst {
                break;
            }
            for &(v, w) in graph.successors(u) {
                let alt = d + u64::from(w);
                if alt < dist[v.index()] {
                    dist[v.index()] = alt;
                    prev[v.index()] = Some(u);
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        if dst != src && prev[dst.index()].is_none() {
            return PathResult::NoPath {
                from: self.from.clone(),
                to: self.to.clone(),
            };
        }

        // Walk predecessors back from dst, then reverse.
        let mut words: Vec<String> = Vec::new();
        let mut at = Some(dst);
        while let Some(node) = at {
            words.push(graph.word(node).to_string());
            at = prev[node.index()];
        }
        words.reverse();

        let cost = dist[dst.index()];
        trace!(from = %self.from, to = %self.to, cost, hops = words.len() - 1, "path found");
        PathResult::Path { words, cost }
    }
}
