//! Language categories and the extension filter they define.
//!
//! Each named category owns a fixed, dot-prefixed, case-sensitive extension
//! set; [`Language::All`] places no restriction at all. The table is the
//! single source of truth for both filtering and the counting dispatch.

use std::fmt;
use std::path::Path;

/// A selectable language category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Every file, regardless of extension
    All,
    /// `.ts`, `.tsx`
    TypeScript,
    /// `.js`, `.jsx`
    JavaScript,
    /// `.py`
    Python,
    /// `.java`
    Java,
}

impl Language {
    /// All categories in presentation order, `All` first.
    pub const CATEGORIES: [Language; 5] = [
        Language::All,
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Java,
    ];

    /// The extensions this category accepts, or `None` for no restriction.
    ///
    /// `None` is a sentinel distinct from an empty set: it admits every
    /// file, while an empty set would admit nothing.
    pub fn extensions(self) -> Option<&'static [&'static str]> {
        match self {
            Language::All => None,
            Language::TypeScript => Some(&[".ts", ".tsx"]),
            Language::JavaScript => Some(&[".js", ".jsx"]),
            Language::Python => Some(&[".py"]),
            Language::Java => Some(&[".java"]),
        }
    }

    /// Whether a file with the given dot-prefixed extension passes this
    /// filter. Comparison is exact, so `.TS` is not TypeScript.
    pub fn includes(self, ext: &str) -> bool {
        match self.extensions() {
            None => true,
            Some(exts) => exts.contains(&ext),
        }
    }

    /// Map a lowercased `--flag` name to its category.
    pub fn from_flag_key(key: &str) -> Option<Language> {
        match key {
            "typescript" => Some(Language::TypeScript),
            "javascript" => Some(Language::JavaScript),
            "python" => Some(Language::Python),
            "java" => Some(Language::Java),
            "all" => Some(Language::All),
            _ => None,
        }
    }

    /// Display name, used by the prompt and the progress message.
    pub fn label(self) -> &'static str {
        match self {
            Language::All => "All",
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Java => "Java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dot-prefixed extension of `path` (e.g. `".ts"`), or an empty string when
/// the file has none. Dotfiles like `.gitignore` have no extension.
pub fn file_extension(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    }
}
