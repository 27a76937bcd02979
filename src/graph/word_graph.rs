//! The immutable word-adjacency graph
//!
//! Words are interned into an arena of dense indices; adjacency lists
//! are keyed by index and frozen at build time. Raw weights are
//! adjacency counts from the corpus. Nothing here mutates after
//! construction, so shared read access needs no locking.

use serde::Serialize;
use std::collections::HashMap;

/// Dense index of an interned word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WordId(pub(crate) u32);

impl WordId {
    /// Get the index as usize for arena addressing
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One edge of the plain edge-list view consumed by external renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeView<'a> {
    /// Source word
    pub from: &'a str,
    /// Target word
    pub to: &'a str,
    /// Adjacency count observed in the corpus
    pub weight: u32,
}

/// A directed word-adjacency graph, immutable after build
///
/// Successor lists are sorted by target `WordId`, so edge lookups are
/// binary searches and iteration order is stable across runs.
#[derive(Debug, Clone)]
pub struct WordGraph {
    /// Arena: id → word
    words: Vec<String>,
    /// Reverse lookup: word → id
    index: HashMap<String, WordId>,
    /// Per-node successors as (target, weight), sorted by target id
    adjacency: Vec<Vec<(WordId, u32)>>,
    /// Total edge count, fixed at build time
    edge_count: usize,
}

impl WordGraph {
    pub(crate) fn new(
        words: Vec<String>,
        index: HashMap<String, WordId>,
        adjacency: Vec<Vec<(WordId, u32)>>,
    ) -> Self {
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Self {
            words,
            index,
            adjacency,
            edge_count,
        }
    }

    /// Look up the id of an already-normalized word
    pub fn word_id(&self, word: &str) -> Option<WordId> {
        self.index.get(word).copied()
    }

    /// Check whether a word exists in the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Get the word for an id
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    /// Successors of a node as (target, weight) pairs, sorted by target id
    pub fn successors(&self, id: WordId) -> &[(WordId, u32)] {
        &self.adjacency[id.index()]
    }

    /// Weight of the edge `from → to`, if it exists
    pub fn weight(&self, from: WordId, to: WordId) -> Option<u32> {
        let succ = self.successors(from);
        succ.binary_search_by_key(&to, |&(t, _)| t)
            .ok()
            .map(|i| succ[i].1)
    }

    /// Check whether the edge `from → to` exists
    pub fn has_edge(&self, from: WordId, to: WordId) -> bool {
        self.weight(from, to).is_some()
    }

    /// Total outgoing weight of a node (0 for sinks)
    pub fn out_weight(&self, id: WordId) -> u32 {
        self.successors(id).iter().map(|&(_, w)| w).sum()
    }

    /// Iterate all node ids
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len() as u32).map(WordId)
    }

    /// Iterate all words in the vocabulary
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Get the number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check whether the graph has no nodes at all
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The plain edge-list view, sorted by source word then target word
    ///
    /// This is the boundary handed to external renderers; the ordering
    /// is stable so repeated dumps are identical.
    pub fn edges(&self) -> Vec<EdgeView<'_>> {
        let mut edges: Vec<EdgeView<'_>> = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, succ)| {
                succ.iter().map(move |&(v, weight)| EdgeView {
                    from: &self.words[u],
                    to: &self.words[v.index()],
                    weight,
                })
            })
            .collect();
        edges.sort_by(|a, b| a.from.cmp(b.from).then(a.to.cmp(b.to)));
        edges
    }
}
