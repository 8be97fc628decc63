//! Error types for tokdiff-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the diff pipeline.
///
/// Neither is transient: both are usage errors, reported once and not retried.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The pipeline was asked for a diff before both sides were supplied
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A source file could not be read
    #[error("cannot read file: {}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for pipeline operations.
pub type DiffResult<T> = Result<T, DiffError>;

impl DiffError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::UnreadableInput {
            path: path.into(),
            source,
        }
    }
}
