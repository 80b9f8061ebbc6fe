//! Markdown code fence handling

use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)```").expect("valid fence pattern")
});

/// Return the trimmed inner content of the first fenced code block.
///
/// The optional language tag (` ```json `) is skipped. An opening fence
/// without a closing one does not count as a block.
pub fn extract_fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
}

/// Return the fenced block's content when present, otherwise the text itself
pub fn unfence(text: &str) -> &str {
    extract_fenced_block(text).unwrap_or(text)
}
