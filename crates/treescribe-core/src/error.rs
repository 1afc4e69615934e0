//! Error taxonomy for a scan.
//!
//! Nothing here is recoverable inside the scanner; every variant is
//! surfaced to the caller unchanged.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while building a request or running a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The request was rejected at construction time.
    #[error("invalid scan request: {0}")]
    InvalidRequest(String),

    /// The root directory is missing, not a directory, or unreadable.
    #[error("cannot scan {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report could not be created or written.
    #[error("cannot write report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The caller set the cancel flag while the walk was running.
    #[error("scan cancelled")]
    Cancelled,
}

impl ScanError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScanError>;
