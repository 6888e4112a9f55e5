//! # loctallylib
//!
//! Walks a directory tree and counts code lines per language category,
//! skipping comment lines with per-language heuristics.
//!
//! ## Overview
//!
//! A scan is a walk, a filter, and a count:
//!
//! - **Walk**: every file under the root, pruning `node_modules` and
//!   dot-prefixed names at any depth, following symlinks.
//! - **Filter**: a [`Language`] category selects files by exact,
//!   case-sensitive extension; [`Language::All`] selects everything.
//! - **Count**: brace-family sources (`.ts`, `.tsx`, `.js`, `.jsx`,
//!   `.java`) skip `//` lines and `/* ... */` blocks, Python skips `#`
//!   lines and standalone triple-quoted blocks, and every other file is
//!   counted as raw physical lines.
//!
//! Files that cannot be read as UTF-8 text are skipped silently; only
//! traversal failures abort a scan.
//!
//! ## Example
//!
//! ```rust
//! use loctallylib::{scan_root, Language};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("app.ts"), "// header\nconst x = 1;\n").unwrap();
//! fs::write(dir.path().join("notes.md"), "one\ntwo\n").unwrap();
//!
//! // A named category keeps only its own extensions.
//! let ts = scan_root(dir.path(), Language::TypeScript).unwrap();
//! assert_eq!((ts.files_scanned, ts.total_lines), (1, 1));
//!
//! // `All` counts every file, raw-counting unrecognized extensions.
//! let all = scan_root(dir.path(), Language::All).unwrap();
//! assert_eq!((all.files_scanned, all.total_lines), (2, 4));
//! ```

pub mod counter;
pub mod error;
pub mod language;
pub mod scan;
pub mod walker;

pub use counter::count_lines;
pub use error::ScanError;
pub use language::{file_extension, Language};
pub use scan::{scan_root, ScanSummary};
pub use walker::collect_files;

/// Result type for loctallylib operations
pub type Result<T> = std::result::Result<T, ScanError>;
