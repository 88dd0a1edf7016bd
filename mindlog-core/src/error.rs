//! Errors raised by the mood log store.
//!
//! Reading never fails (a missing or broken log reads as empty). These only
//! surface on the write path, where silently dropping a new entry is worse
//! than refusing it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, creating or writing the log file failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing log could not be decoded; appending would overwrite it.
    #[error("Corrupt mood log {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the log failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The score is outside the configured range.
    #[error("Score {score} is outside the allowed range {min}-{max}")]
    ScoreOutOfRange { score: i64, min: i64, max: i64 },

    /// Moving the temporary file over the log failed.
    #[error("Could not replace {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
