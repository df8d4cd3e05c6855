//! # Store Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The on-disk document is not a valid snapshot.
    ///
    /// ## When This Occurs
    /// - Truncated write by a previous crash (pre-atomic-save versions)
    /// - Manual edits to the JSON file
    ///
    /// `load_or_default` degrades this case to the default snapshot.
    #[error("snapshot file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No per-user data directory could be resolved on this platform.
    #[error("could not resolve a data directory for the snapshot store")]
    NoDataDir,
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
