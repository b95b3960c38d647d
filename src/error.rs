//! Error types for watchrun
//!
//! Uses `thiserror` for library errors. Only startup-phase failures live
//! here: a child process exiting non-zero is expected steady-state behavior
//! and is reported through `WatchEvent`, never as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for watchrun operations
pub type WatchrunResult<T> = Result<T, WatchrunError>;

/// Main error type for watchrun operations
#[derive(Error, Debug)]
pub enum WatchrunError {
    /// Watch target does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The OS-level change subscription could not be registered
    #[error("cannot watch {path}: {source}")]
    Subscribe {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    /// Child process could not be created (missing shell, resource limits)
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
