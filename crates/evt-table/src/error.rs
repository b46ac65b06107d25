//! Error types for loading the event table.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading an event table from disk.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to open the source file.
    #[error("failed to open event table {path}: {source}")]
    Open {
        /// Path to the file that could not be opened.
        path: PathBuf,
        /// Underlying CSV/I/O error.
        source: csv::Error,
    },

    /// Failed to read a row or the header line.
    #[error("failed to read event table {path}: {source}")]
    Read {
        /// Path to the file being read.
        path: PathBuf,
        /// Underlying CSV/I/O error.
        source: csv::Error,
    },

    /// The header row lacks columns every event needs.
    #[error("event table {path} is missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Path to the offending file.
        path: PathBuf,
        /// Names of the missing columns.
        columns: Vec<String>,
    },
}
