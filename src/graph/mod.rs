//! Core graph data structures

mod builder;
mod word_graph;


pub use builder::GraphBuilder;
pub use word_graph::{EdgeView, WordGraph, WordId};
