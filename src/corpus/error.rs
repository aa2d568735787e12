use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a review corpus.
///
/// Malformed lines are never errors; they are skipped and counted in
/// [`CorpusStats`](super::CorpusStats).
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to open corpus {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read corpus line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
