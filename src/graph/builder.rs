//! Graph construction from a token sequence
//!
//! Each consecutive token pair `(u, v)` increments the edge `u → v`
//! by one, creating it at weight 1 if absent. The second token of a
//! pair is interned even when it never gains outgoing edges, so every
//! successor exists as a node (possibly a sink). Building is the only
//! mutating phase; `build` freezes the adjacency into the immutable
//! [`WordGraph`].

use super::word_graph::{WordGraph, WordId};
use crate::error::{GraphError, Result};
use crate::text::normalize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Accumulates word adjacencies and freezes them into a [`WordGraph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    words: Vec<String>,
    index: HashMap<String, WordId>,
    /// During build the successor map is a hash map per node; `build`
    /// sorts it into the frozen adjacency representation.
    adjacency: Vec<HashMap<WordId, u32>>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an ordered token sequence
    pub fn from_tokens<I, S>(tokens: I) -> WordGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        let mut prev: Option<WordId> = None;
        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                prev = None;
                continue;
            }
            let id = builder.intern(token);
            if let Some(u) = prev {
                builder.observe(u, id);
            }
            prev = Some(id);
        }
        builder.build()
    }

    /// Normalize raw text and build a graph from it
    pub fn from_text(text: &str) -> WordGraph {
        Self::from_tokens(normalize(text))
    }

    /// Read a corpus file and build a graph from its contents
    pub fn from_path(path: impl AsRef<Path>) -> Result<WordGraph> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GraphError::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&content))
    }

    /// Intern a word, returning its id
    fn intern(&mut self, word: &str) -> WordId {
        if let Some(&id) = self.index.get(word) {
            return id;
        }
        let id = WordId(self.words.len() as u32);
        self.words.push(word.to_string());
        self.index.insert(word.to_string(), id);
        self.adjacency.push(HashMap::new());
        id
    }

    /// Record one observed adjacency `u → v`
    fn observe(&mut self, u: WordId, v: WordId) {
        *self.adjacency[u.index()].entry(v).or_insert(0) += 1;
    }

    /// Freeze the accumulated adjacencies into an immutable graph
    fn build(self) -> WordGraph {
        let adjacency: Vec<Vec<(WordId, u32)>> = self
            .adjacency
            .into_iter()
            .map(|succ| {
                let mut succ: Vec<(WordId, u32)> = succ.into_iter().collect();
                succ.sort_by_key(|&(target, _)| target);
                succ
            })
            .collect();
        let graph = WordGraph::new(self.words, self.index, adjacency);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        graph
    }
}
