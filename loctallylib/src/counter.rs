//! Per-file line counting.
//!
//! Counting strategy is chosen by extension. Brace-family sources
//! (`.js`, `.jsx`, `.ts`, `.tsx`, `.java`) and Python get a comment-aware
//! count; every other file is counted as raw physical lines.

use std::sync::OnceLock;

use regex::Regex;

/// Extensions that share C-style `//` and `/* ... */` comments.
const BRACE_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".java"];

/// Count the code lines of one file, dispatching on its dot-prefixed
/// extension. Unrecognized extensions fall back to a raw line count in
/// which blank lines and the segment after a trailing newline both count.
pub fn count_lines(content: &str, extension: &str) -> u64 {
    if BRACE_EXTENSIONS.contains(&extension) {
        count_brace_family(content)
    } else if extension == ".py" {
        count_python(content)
    } else {
        content.split('\n').count() as u64
    }
}

/// Block comments are removed first, so a `/* ... */` spanning several
/// lines can fuse its surroundings into a single line before counting.
fn count_brace_family(content: &str) -> u64 {
    let stripped = block_comment_re().replace_all(content, "");
    count_code_lines(&stripped, "//")
}

fn count_python(content: &str) -> u64 {
    let stripped = strip_triple_quoted_blocks(content);
    count_code_lines(&stripped, "#")
}

/// Lines that are blank after trimming, or whose first non-whitespace
/// characters are the line-comment marker, do not count.
fn count_code_lines(content: &str, line_comment: &str) -> u64 {
    content
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with(line_comment)
        })
        .count() as u64
}

/// Lazily matched, so an unterminated `/*` is left in place.
fn block_comment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
}

/// Remove triple-quoted blocks that open at the start of a line.
///
/// A block opens where a line's leading whitespace (which may swallow
/// whole blank lines) is followed by `'''` or `"""`, and runs through the
/// next occurrence of the same opener. An `=` anywhere on the opening
/// line marks an assignment, and the string value is kept. A block whose
/// closer never appears is also kept.
fn strip_triple_quoted_blocks(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut copied = 0;
    let mut candidate = Some(0);
    while let Some(start) = candidate {
        match match_block_at(content, start) {
            Some(end) => {
                out.push_str(&content[copied..start]);
                copied = end;
                candidate = next_line_start(content, end);
            }
            None => candidate = next_line_start(content, start + 1),
        }
    }
    out.push_str(&content[copied..]);
    out
}

/// Try to match one strippable block beginning at line start `start`.
/// Returns the offset just past the closing quotes.
fn match_block_at(content: &str, start: usize) -> Option<usize> {
    let rest = &content[start..];
    let ws_len = rest.len() - rest.trim_start().len();
    let quote_at = start + ws_len;
    let after_ws = &content[quote_at..];
    let opener = if after_ws.starts_with("'''") {
        "'''"
    } else if after_ws.starts_with("\"\"\"") {
        "\"\"\""
    } else {
        return None;
    };
    let line_end = after_ws.find(['\n', '\r']).unwrap_or(after_ws.len());
    if after_ws[..line_end].contains('=') {
        return None;
    }
    let close = after_ws[3..].find(opener)?;
    Some(quote_at + 3 + close + 3)
}

/// First offset at or after `from` that begins a line, i.e. follows a
/// `\n` or `\r`. Offset 0 is handled by the caller's initial candidate.
fn next_line_start(content: &str, from: usize) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut pos = from.max(1);
    while pos < bytes.len() {
        if bytes[pos - 1] == b'\n' || bytes[pos - 1] == b'\r' {
            return Some(pos);
        }
        pos += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_count_includes_blanks_and_trailing_segment() {
        assert_eq!(count_lines("a\nb\n", ".md"), 3);
        assert_eq!(count_lines("one\ntwo", ".txt"), 2);
        assert_eq!(count_lines("\n\n", ""), 3);
    }

    #[test]
    fn empty_file_counts_depend_on_family() {
        assert_eq!(count_lines("", ".md"), 1);
        assert_eq!(count_lines("", ".ts"), 0);
        assert_eq!(count_lines("", ".py"), 0);
    }

    #[test]
    fn extension_dispatch_is_case_sensitive() {
        // `.TS` is not recognized, so `//` is not a comment there.
        assert_eq!(count_lines("// x\n", ".TS"), 2);
        assert_eq!(count_lines("// x\n", ".ts"), 0);
    }

    #[test]
    fn brace_family_skips_line_comments_and_blanks() {
        let src = "  // leading comment\n\nconst x = 1;\n";
        assert_eq!(count_lines(src, ".ts"), 1);
    }

    #[test]
    fn brace_family_counts_code_with_trailing_comment() {
        assert_eq!(count_lines("x(); // note\n", ".js"), 1);
    }

    #[test]
    fn brace_family_strips_multi_line_block_comment() {
        let src = "/*\n * header\n */\npublic class A {}\n";
        assert_eq!(count_lines(src, ".java"), 1);
    }

    #[test]
    fn file_that_is_one_block_comment_counts_zero() {
        assert_eq!(count_lines("/* a\nb\nc */", ".tsx"), 0);
    }

    #[test]
    fn block_comment_inside_a_line_leaves_the_code() {
        assert_eq!(count_lines("let a = 1; /* why */ let b = 2;", ".js"), 1);
        assert_eq!(count_lines("a /* spans\nlines */ b\n", ".ts"), 1);
    }

    #[test]
    fn unterminated_block_comment_is_kept() {
        assert_eq!(count_lines("/* open\ncode();\n", ".ts"), 2);
    }

    #[test]
    fn python_skips_hash_comments_and_blanks() {
        let src = "# top\n\nx = 1\ny = 2  # inline\n";
        assert_eq!(count_lines(src, ".py"), 2);
    }

    #[test]
    fn python_strips_standalone_docstrings() {
        let src = "def f():\n    '''doc\n    more'''\n    pass\n";
        assert_eq!(count_lines(src, ".py"), 2);
        let src = "\"\"\"module doc\"\"\"\nx = 1\n";
        assert_eq!(count_lines(src, ".py"), 1);
    }

    #[test]
    fn python_keeps_assigned_triple_quoted_strings() {
        assert_eq!(count_lines("x = \"\"\"doc\"\"\"\n", ".py"), 1);
        // The closer of an assigned string does not open a new block.
        let src = "s = '''\ntext\n'''\n";
        assert_eq!(count_lines(src, ".py"), 3);
    }

    #[test]
    fn strip_handles_adjacent_blocks() {
        assert_eq!(strip_triple_quoted_blocks("'''a'''\n'''b'''"), "\n");
    }

    #[test]
    fn strip_consumes_blank_lines_before_a_block() {
        assert_eq!(strip_triple_quoted_blocks("\n\n'''d'''\nx\n"), "\nx\n");
    }

    #[test]
    fn strip_keeps_equals_on_opening_line() {
        assert_eq!(
            strip_triple_quoted_blocks("'''a''' = weird\n"),
            "'''a''' = weird\n"
        );
    }

    #[test]
    fn strip_handles_quote_runs() {
        // Six quotes form an empty block.
        assert_eq!(strip_triple_quoted_blocks("''''''"), "");
        // Nine leave an unclosed trailing opener in place.
        assert_eq!(strip_triple_quoted_blocks("'''''''''"), "'''");
    }

    #[test]
    fn strip_keeps_unclosed_blocks() {
        let src = "'''\nnever closed\n";
        assert_eq!(strip_triple_quoted_blocks(src), src);
    }

    #[test]
    fn strip_requires_line_start() {
        let src = "x '''not at start''' y\n";
        assert_eq!(strip_triple_quoted_blocks(src), src);
    }

    #[test]
    fn mixed_python_file_counts_only_code() {
        let src = "#!/usr/bin/env python\n\"\"\"\nModule doc.\n\"\"\"\n\nimport os\n\n\ndef main():\n    # body\n    return os.getcwd()\n";
        assert_eq!(count_lines(src, ".py"), 3);
    }
}
