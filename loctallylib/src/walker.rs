//! Directory traversal and entry exclusion.
//!
//! The walk prunes `node_modules` and dot-prefixed names at every depth,
//! for directories and files alike, and follows symlinks. Traversal
//! errors abort the walk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::Result;

/// Collect every file under `root` that survives the name exclusions.
///
/// Fails fast with [`ScanError::PathNotFound`] when `root` is missing or
/// not a directory, and with [`ScanError::Walk`] when a directory cannot
/// be read mid-walk. No ordering is guaranteed.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        // The root always passes; a start path like `.` must not prune itself.
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_name(entry.file_name()));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_excluded_name(name: &OsStr) -> bool {
    name == OsStr::new("node_modules") || name.to_string_lossy().starts_with('.')
}
