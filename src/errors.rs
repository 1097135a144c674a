use crate::PageId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the transition model and both estimators
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageRankError {
    #[error("unknown page: \"{page}\"")]
    InvalidPage { page: String },

    #[error("page index {id} out of range for a graph with {len} pages")]
    InvalidPageId { id: PageId, len: usize },

    #[error("invalid {name}: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot rank an empty graph")]
    EmptyGraph,

    #[error("no convergence after {iterations} iterations (largest change {delta})")]
    NonConvergence { iterations: usize, delta: f64 },
}

impl PageRankError {
    pub(crate) fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        PageRankError::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}

/// Errors returned while reading a corpus directory
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },
}

pub type Result<T, E = PageRankError> = std::result::Result<T, E>;
