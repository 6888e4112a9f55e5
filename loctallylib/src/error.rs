//! Error types for loctallylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a scan.
///
/// Per-file read failures never surface here; the aggregator skips
/// unreadable files instead of reporting them.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Scan root is missing or not a directory
    #[error("path does not exist or is not a directory: {0}")]
    PathNotFound(PathBuf),

    /// Directory traversal failed (unreadable directory, broken link)
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}
