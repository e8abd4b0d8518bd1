//! Error types for download directory operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DownloadsError.
pub type Result<T> = std::result::Result<T, DownloadsError>;

/// Errors that can occur while managing the downloads directory tree.
#[derive(Error, Debug)]
pub enum DownloadsError {
    /// Cannot determine home directory.
    #[error("cannot determine home directory")]
    NoHomeDirectory,

    /// Cannot determine the platform configuration directory.
    #[error("cannot determine platform configuration directory")]
    NoConfigDirectory,

    /// Failed to create directory.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list directory contents.
    #[error("failed to list directory '{path}': {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory does not exist.
    #[error("directory '{path}' does not exist")]
    DirectoryNotFound { path: PathBuf },

    /// Directory exists but is not writable.
    #[error("directory '{path}' is not writable: {source}")]
    DirectoryNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path validation failed (potential path traversal).
    #[error("path validation failed for '{path}': potential path traversal")]
    PathValidation { path: PathBuf },

    /// Failed to serialize or deserialize the configuration record.
    #[error("invalid configuration file '{path}': {source}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadsError {
    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a DirectoryListing error.
    pub fn directory_listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryListing {
            path: path.into(),
            source,
        }
    }
}
