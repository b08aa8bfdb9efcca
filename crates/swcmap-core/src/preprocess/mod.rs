//! Source preprocessing shared by every extraction strategy.
//!
//! Normalizes line endings and strips comments by delimiter matching.
//! Stripping is not literal-aware: comment markers inside string
//! literals are treated as comments, a coarse tradeoff the extractors
//! inherit. Block comment removal collapses the comment's newlines, so
//! downstream line numbers are relative to the stripped text.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static COMMENT_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)//.*?$").unwrap());

/// Map `\r\n` and bare `\r` to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Remove `/* ... */` blocks (across lines) and `// ...` tails.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = COMMENT_BLOCK_RE.replace_all(text, "");
    COMMENT_LINE_RE.replace_all(&without_blocks, "").into_owned()
}

/// Normalize then strip, the canonical per-file preparation step.
pub fn preprocess_source(text: &str) -> String {
    strip_comments(&normalize_newlines(text))
}

/// 1-based line number of a byte offset: newlines before the offset
/// plus one. Valid for the same text the offset was produced from.
pub fn line_at_offset(text: &str, offset: usize) -> u32 {
    let end = offset.min(text.len());
    let newlines = text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count();
    (newlines + 1) as u32
}
