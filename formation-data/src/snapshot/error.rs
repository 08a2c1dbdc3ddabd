//! Error types for snapshot parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a static snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read input CSV file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid content in input CSV file {path:?}, row {row:?} (line {line})")]
    InvalidRow {
        path: PathBuf,
        line: usize,
        row: Vec<String>,
    },

    #[error("Duplicate object name in input CSV file: {name} (line {line})")]
    DuplicateName {
        path: PathBuf,
        line: usize,
        name: String,
    },
}

impl SnapshotError {
    /// Whether the error describes bad file content rather than a failure to read it.
    pub fn is_content_error(&self) -> bool {
        !matches!(self, SnapshotError::Io { .. })
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            SnapshotError::Io { path, .. }
            | SnapshotError::InvalidRow { path, .. }
            | SnapshotError::DuplicateName { path, .. } => path,
        }
    }
}
