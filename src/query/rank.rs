//! PageRank scoring by bounded power iteration
//!
//! Fixed damping and a fixed iteration count, no convergence test:
//! this is a bounded-cost approximation. Sink nodes redistribute
//! nothing, so with sinks present the total rank mass sums below 1.0.
//! That leak matches the reference behavior and is deliberate.

use crate::graph::WordGraph;
use tracing::debug;

/// Damping factor: probability of following an edge vs. teleporting
pub const DAMPING: f64 = 0.85;

/// Number of power iterations
pub const ITERATIONS: usize = 20;

/// Compute the rank of every node, indexed by `WordId`
pub fn page_ranks(graph: &WordGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut ranks = vec![1.0 / n as f64; n];
    let base = (1.0 - DAMPING) / n as f64;

    for _ in 0..ITERATIONS {
        let mut next = vec![base; n];
        for u in graph.ids() {
            let out = graph.out_weight(u);
            if out == 0 {
                // Sink: its mass is not redistributed this iteration.
                continue;
            }
            let share = DAMPING * ranks[u.index()] / f64::from(out);
            for &(v, w) in graph.successors(u) {
                next[v.index()] += share * f64::from(w);
            }
        }
        ranks = next;
    }

    debug!(nodes = n, iterations = ITERATIONS, "pagerank computed");
    ranks
}

/// Rank of a single word (lowercased on entry); 0.0 if absent
pub fn page_rank(graph: &WordGraph, word: &str) -> f64 {
    let word = word.to_lowercase();
    match graph.word_id(&word) {
        Some(id) => page_ranks(graph)[id.index()],
        None => 0.0,
    }
}
