//! Bridge-word text augmentation
//!
//! Rewrites input text by inserting, between each adjacent token pair,
//! one bridge word chosen uniformly at random when any exist. The
//! random source is injected so replays are reproducible under test.

use super::bridge;
use crate::graph::WordGraph;
use crate::text::normalize;
use rand::Rng;

/// Augment `text` against the graph, inserting random bridge words
///
/// The input is normalized with the same rules as graph construction.
/// Tokens absent from the vocabulary pass through unchanged; they
/// simply never produce bridges. Empty input yields an empty string.
pub fn augment<R: Rng + ?Sized>(graph: &WordGraph, text: &str, rng: &mut R) -> String {
    let tokens = normalize(text);
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len());

    for pair in tokens.windows(2) {
        out.push(&pair[0]);
        if let (Some(u), Some(v)) = (graph.word_id(&pair[0]), graph.word_id(&pair[1])) {
            let mids = bridge::candidates(graph, u, v);
            if !mids.is_empty() {
                let mid = mids[rng.gen_range(0..mids.len())];
                out.push(graph.word(mid));
            }
        }
    }
    if let Some(last) = tokens.last() {
        out.push(last);
    }

    out.join(" ")
}
