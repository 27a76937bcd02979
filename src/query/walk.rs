//! Randomized edge-disjoint traversal
//!
//! Starts at a uniformly random node and follows uniformly random
//! outgoing edges until hitting a sink or an edge already used in
//! this walk. Each distinct directed edge is traversed at most once,
//! so the walk halts within `|edges| + 1` node visits.

use super::types::WalkResult;
use crate::graph::{WordGraph, WordId};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Perform one random walk over the graph
///
/// The rng is injected and seedable; successor choice is uniform over
/// a node's distinct outgoing edges (not weight-biased), matching the
/// reference behavior.
pub fn random_walk<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> WalkResult {
    if graph.is_empty() {
        return WalkResult::EmptyGraph;
    }

    let mut current = WordId(rng.gen_range(0..graph.node_count() as u32));
    let mut words = vec![graph.word(current).to_string()];
    let mut used: HashSet<(WordId, WordId)> = HashSet::new();

    loop {
        let succ = graph.successors(current);
        if succ.is_empty() {
            break; // dead end
        }
        let (next, _) = succ[rng.gen_range(0..succ.len())];
        if !used.insert((current, next)) {
            // Edge already traversed in this walk; stop without
            // appending the repeated edge's target.
            break;
        }
        words.push(graph.word(next).to_string());
        current = next;
    }

    debug!(steps = words.len(), "random walk finished");
    WalkResult::Walk { words }
}
