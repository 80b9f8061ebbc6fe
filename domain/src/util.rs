//! Shared utility functions.

/// Return at most the first `max_chars` characters of `s`.
///
/// Counts Unicode scalar values rather than bytes so that provider text in
/// any script (and emoji-heavy quiz content) is cut at a character boundary.
pub fn excerpt(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_ascii() {
        assert_eq!(excerpt("hello world", 5), "hello");
    }

    #[test]
    fn excerpt_no_op_when_short() {
        assert_eq!(excerpt("hi", 10), "hi");
        assert_eq!(excerpt("exact", 5), "exact");
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        assert_eq!(excerpt("🐛🚀📚", 2), "🐛🚀");
        assert_eq!(excerpt("あのね", 1), "あ");
    }

    #[test]
    fn excerpt_empty() {
        assert_eq!(excerpt("", 10), "");
        assert_eq!(excerpt("abc", 0), "");
    }
}
