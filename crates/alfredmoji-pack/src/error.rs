//! Error types for the emit and archive stages.

use std::path::PathBuf;

use thiserror::Error;

/// Failure writing a single snippet file. Reported per record; the run
/// carries on with the next one.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to serialize snippet {name:?}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure building the `.alfredsnippets` archive. Any single bad input file
/// aborts the whole archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("archive I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
