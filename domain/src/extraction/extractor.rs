//! Recover a JSON array of objects from loosely formatted provider text.
//!
//! Stages run in order and the first one that yields valid JSON wins:
//!
//! 1. unwrap the first fenced code block, if any
//! 2. strict parse (a lone object becomes a one-element array)
//! 3. locate the first `[` opening an array of objects and cut it at its
//!    balanced `]`; for an array cut off mid-way keep its complete
//!    objects; otherwise take the first balanced `{...}` object
//! 4. apply the [`repair`](super::repair) rules and parse once more

use super::ExtractError;
use super::fence::unfence;
use super::repair::{apply_repairs, closes_single_quoted};
use serde_json::Value;
use std::borrow::Cow;

/// Characters of offending text carried by an [`ExtractError`]
pub const EXCERPT_CHARS: usize = 500;

/// Extract a list of JSON values from provider text
pub fn extract_json_array(text: &str) -> Result<Vec<Value>, ExtractError> {
    let body = unfence(text);
    if let Ok(values) = parse_strict(body) {
        return Ok(values);
    }

    let candidate: Cow<'_, str> = match locate_object_array(body) {
        Some(array) => Cow::Borrowed(array),
        None => salvage_truncated_array(body)
            .map(Cow::Owned)
            .or_else(|| locate_object(body).map(Cow::Borrowed))
            .unwrap_or(Cow::Borrowed(body)),
    };
    if let Ok(values) = parse_strict(&candidate) {
        return Ok(values);
    }

    let repaired = apply_repairs(&candidate);
    parse_strict(&repaired)
        .map_err(|e| ExtractError::new(format!("unrecoverable JSON: {}", e), body))
}

/// Byte offsets of every `[` whose next non-whitespace character is `{`
fn object_array_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices()
        .filter(|&(idx, ch)| ch == '[' && text[idx + 1..].trim_start().starts_with('{'))
        .map(|(idx, _)| idx)
}

/// Find the first `[` whose next non-whitespace character is `{` and that
/// closes cleanly. Later candidates are tried when an earlier one is
/// unbalanced.
pub fn locate_object_array(text: &str) -> Option<&str> {
    object_array_starts(text).find_map(|idx| balanced_from(text, idx))
}

/// Rebuild an array that never closes (output cut at the token limit)
/// from the complete objects that follow its opening `[`.
pub fn salvage_truncated_array(text: &str) -> Option<String> {
    let start = object_array_starts(text).next()?;
    let mut objects = Vec::new();
    let mut pos = start + 1;

    loop {
        let rest = &text[pos..];
        pos += rest.len()
            - rest
                .trim_start_matches(|c: char| c.is_whitespace() || c == ',')
                .len();
        if !text[pos..].starts_with('{') {
            break;
        }
        match balanced_from(text, pos) {
            Some(object) => {
                objects.push(object);
                pos += object.len();
            }
            None => break,
        }
    }

    (!objects.is_empty()).then(|| format!("[{}]", objects.join(",")))
}

/// Find the first balanced `{...}` object
fn locate_object(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|&(_, ch)| ch == '{')
        .find_map(|(idx, _)| balanced_from(text, idx))
}

/// Slice from the bracket at `start` to its matching closer, skipping
/// brackets inside string literals. Single-quoted literals end at a `'`
/// followed by a structural character, as in the quote repair rule.
/// Mismatched nesting yields `None`.
fn balanced_from(text: &str, start: usize) -> Option<&str> {
    let mut closers: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open
                && (open == '"' || closes_single_quoted(text[start + offset + 1..].chars()))
            {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '{' => closers.push('}'),
            '[' => closers.push(']'),
            '}' | ']' => {
                if closers.pop() != Some(ch) {
                    return None;
                }
                if closers.is_empty() {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_strict(text: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(object @ Value::Object(_)) => Ok(vec![object]),
        Ok(_) => Err("expected a JSON array or object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}
