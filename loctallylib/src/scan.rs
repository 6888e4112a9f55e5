//! Scan orchestration: walk the tree, filter by language, sum counts.

use std::fs;
use std::path::Path;

use crate::counter::count_lines;
use crate::language::{file_extension, Language};
use crate::walker::collect_files;
use crate::Result;

/// Totals produced by one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Files whose contents were counted
    pub files_scanned: u64,
    /// Sum of the per-file code-line counts
    pub total_lines: u64,
}

/// Walk `root`, keep the files `filter` accepts, and sum their code lines.
///
/// A file that cannot be read as UTF-8 text is skipped and contributes to
/// neither total. Traversal failures, by contrast, abort the scan.
pub fn scan_root(root: &Path, filter: Language) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();
    for path in collect_files(root)? {
        let ext = file_extension(&path);
        if !filter.includes(&ext) {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        summary.files_scanned += 1;
        summary.total_lines += count_lines(&content, &ext);
    }
    Ok(summary)
}
