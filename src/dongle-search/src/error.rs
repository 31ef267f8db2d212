//! Error types for scanning and caching.

use std::path::PathBuf;

/// Result type alias for scan operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Errors that can occur while preparing a scan.
///
/// Note that per-directory read failures during a walk are never surfaced
/// through this type; an unreadable subtree simply yields no candidates.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The requested root does not exist.
    #[error("Root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The requested root is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// I/O error while resolving the root path.
    #[error("Failed to resolve '{path}': {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Creates a new `RootNotFound` error.
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound(path.into())
    }

    /// Creates a new `NotADirectory` error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Creates a new `Resolve` error.
    pub fn resolve(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Resolve {
            path: path.into(),
            source,
        }
    }
}
