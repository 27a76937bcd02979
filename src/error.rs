//! Crate error type
//!
//! The only fallible operation in the core is reading a corpus file.
//! Query outcomes like "word not in graph" or "no path" are expected
//! answers and live on the query result enums, not here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in wordgraph operations
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read corpus {}: {source}", path.display())]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for wordgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
