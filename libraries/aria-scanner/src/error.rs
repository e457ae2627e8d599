//! Error types for the scanner

use thiserror::Error;

/// Scanner errors
///
/// A full scan never fails on these: unreadable roots and files are skipped
/// and logged. They only surface when a single directory is scanned
/// explicitly.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Root path is not a directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
