//! Textual repairs for near-JSON provider output.
//!
//! Each rule is a pure `&str -> String` transformation. [`apply_repairs`]
//! runs them in the fixed order of [`REPAIR_RULES`]. Rules that only make
//! sense on JSON structure skip the contents of string literals so
//! that question text such as `"Keys, values: both"` survives untouched.

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("valid trailing comma pattern"));

static BARE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:").expect("valid bare key pattern")
});

static RAW_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid newline pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// A named repair step
#[derive(Debug, Clone, Copy)]
pub struct RepairRule {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// The repair pipeline, in application order
pub const REPAIR_RULES: [RepairRule; 5] = [
    RepairRule {
        name: "strip_trailing_commas",
        apply: strip_trailing_commas,
    },
    RepairRule {
        name: "normalize_single_quotes",
        apply: normalize_single_quotes,
    },
    RepairRule {
        name: "quote_bare_keys",
        apply: quote_bare_keys,
    },
    RepairRule {
        name: "collapse_raw_newlines",
        apply: collapse_raw_newlines,
    },
    RepairRule {
        name: "collapse_whitespace",
        apply: collapse_whitespace,
    },
];

/// Run every rule of [`REPAIR_RULES`] in order
pub fn apply_repairs(text: &str) -> String {
    REPAIR_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| (rule.apply)(&acc))
}

/// `[1, 2,]` → `[1, 2]`, `{"a": 1, }` → `{"a": 1}`
pub fn strip_trailing_commas(text: &str) -> String {
    map_outside_strings(text, |segment| {
        TRAILING_COMMA.replace_all(segment, "$1").into_owned()
    })
}

/// Rewrite single-quoted string literals as double-quoted ones.
///
/// A `'` inside a single-quoted literal only closes it when the next
/// non-whitespace character is structural (`,` `:` `}` `]`) or the text
/// ends, so apostrophes like `'What's up?'` are kept. Double quotes inside
/// converted literals are escaped; double-quoted literals are left alone.
pub fn normalize_single_quotes(text: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum Context {
        Structure,
        Double,
        Single,
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut context = Context::Structure;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match context {
            Context::Structure => match c {
                '\'' => {
                    out.push('"');
                    context = Context::Single;
                }
                '"' => {
                    out.push(c);
                    context = Context::Double;
                }
                _ => out.push(c),
            },
            Context::Double => {
                out.push(c);
                if c == '\\' {
                    if let Some(&next) = chars.get(i + 1) {
                        out.push(next);
                        i += 1;
                    }
                } else if c == '"' {
                    context = Context::Structure;
                }
            }
            Context::Single => match c {
                '\\' => match chars.get(i + 1) {
                    Some(&'\'') => {
                        out.push('\'');
                        i += 1;
                    }
                    Some(&next) => {
                        out.push('\\');
                        out.push(next);
                        i += 1;
                    }
                    None => out.push('\\'),
                },
                '"' => out.push_str("\\\""),
                '\'' if closes_single_quoted(chars[i + 1..].iter().copied()) => {
                    out.push('"');
                    context = Context::Structure;
                }
                _ => out.push(c),
            },
        }
        i += 1;
    }

    out
}

/// Whether a `'` followed by `rest` ends a single-quoted literal
pub(super) fn closes_single_quoted(mut rest: impl Iterator<Item = char>) -> bool {
    match rest.find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => matches!(c, ',' | ':' | '}' | ']'),
    }
}

/// `{question: "x"}` → `{"question": "x"}`
pub fn quote_bare_keys(text: &str) -> String {
    map_outside_strings(text, |segment| {
        BARE_KEY.replace_all(segment, "$1\"$2\":").into_owned()
    })
}

/// Replace raw line breaks with spaces.
///
/// Raw control characters are illegal inside JSON strings; escape
/// sequences written as text (`\n`) are two characters and stay intact.
pub fn collapse_raw_newlines(text: &str) -> String {
    RAW_NEWLINE.replace_all(text, " ").into_owned()
}

/// Collapse whitespace runs between tokens into a single space
pub fn collapse_whitespace(text: &str) -> String {
    map_outside_strings(text, |segment| {
        WHITESPACE_RUN.replace_all(segment, " ").into_owned()
    })
}

/// Apply `f` to every span outside string literals, copying the literals
/// (quotes included) verbatim. Single-quoted literals close the same way
/// [`normalize_single_quotes`] closes them.
fn map_outside_strings(text: &str, f: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut segment_start = 0;
    let mut chars = text.char_indices();

    while let Some((start, open)) = chars.next() {
        if open != '"' && open != '\'' {
            continue;
        }
        out.push_str(&f(&text[segment_start..start]));

        let mut end = text.len();
        let mut escaped = false;
        for (j, c) in chars.by_ref() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open && (open == '"' || closes_single_quoted(text[j + 1..].chars())) {
                end = j + 1;
                break;
            }
        }
        out.push_str(&text[start..end]);
        segment_start = end;
    }

    out.push_str(&f(&text[segment_start..]));
    out
}
