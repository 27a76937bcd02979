//! Bridge-word lookup
//!
//! A word `m` bridges `w1` and `w2` when the edges `w1 → m` and
//! `m → w2` both exist, regardless of weight. Candidates are returned
//! in ascending lexicographic order so output is deterministic even
//! though the underlying successor maps are hash-based during build.

use super::types::BridgeResult;
use crate::graph::{WordGraph, WordId};

/// Query for words bridging two vocabulary words
#[derive(Debug, Clone)]
pub struct BridgeQuery {
    from: String,
    to: String,
}

impl BridgeQuery {
    /// Create a bridge query between two words (lowercased on entry)
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into().to_lowercase(),
            to: to.into().to_lowercase(),
        }
    }

    /// Execute the query against a graph
    pub fn execute(&self, graph: &WordGraph) -> BridgeResult {
        let (Some(u), Some(v)) = (graph.word_id(&self.from), graph.word_id(&self.to)) else {
            return BridgeResult::NoSuchWord;
        };

        let words: Vec<String> = candidates(graph, u, v)
            .into_iter()
            .map(|m| graph.word(m).to_string())
            .collect();

        if words.is_empty() {
            BridgeResult::NoBridge {
                from: self.from.clone(),
                to: self.to.clone(),
            }
        } else {
            BridgeResult::Bridges {
                from: self.from.clone(),
                to: self.to.clone(),
                words,
            }
        }
    }
}

/// Bridge candidates between two nodes, sorted lexicographically by word
///
/// Shared with text augmentation, which picks uniformly from this list.
pub(crate) fn candidates(graph: &WordGraph, from: WordId, to: WordId) -> Vec<WordId> {
    let mut mids: Vec<WordId> = graph
        .successors(from)
        .iter()
        .map(|&(mid, _)| mid)
        .filter(|&mid| graph.has_edge(mid, to))
        .collect();
    mids.sort_by(|&a, &b| graph.word(a).cmp(graph.word(b)));
    mids
}
