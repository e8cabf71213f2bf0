//! Bareness classification for CTON atoms and keys.
//!
//! CTON drops quotes wherever the tokenizer can still split the text
//! unambiguously. This module holds the two predicates that make that call:
//!
//! - [`is_bare_value`] — may a string value appear unquoted?
//! - [`is_bare_key`] — may an object key appear unquoted?
//!
//! The two rules are deliberately distinct. Values admit underscores and the
//! whole non-ASCII range (any code point ≥ U+0080, printable or not — the
//! tokenizer only splits on ASCII whitespace and the four structural
//! delimiters). Keys are narrower: ASCII letters, digits, hyphen, and period
//! only. Collapsing them into one shared predicate is a classic
//! implementation mistake; keep them separate.
//!
//! Anything that fails its predicate is quoted with JSON-style escapes, with
//! one format quirk: a non-bare string whose text is itself a complete, valid
//! JSON document is embedded between quotes *verbatim*, interior `"`
//! characters and all. See [`write_quoted`] and the crate-level docs.

/// Returns `true` if a string value may be written without quotes.
///
/// Bare values are non-empty runs of ASCII letters, digits, `-`, `.`, `_`,
/// and any code point at or above U+0080. ASCII whitespace, the structural
/// delimiters `{ } [ ]`, and the quote character all fail the class, so a
/// bare value can never be mistaken for a token boundary.
///
/// # Examples
///
/// ```rust
/// use serde_cton::grammar::is_bare_value;
///
/// assert!(is_bare_value("hello"));
/// assert!(is_bare_value("v1.2-beta_3"));
/// assert!(is_bare_value("Bonjour"));
/// assert!(is_bare_value("日本語"));
///
/// assert!(!is_bare_value(""));
/// assert!(!is_bare_value("hello world"));
/// assert!(!is_bare_value("a{b"));
/// assert!(!is_bare_value("line\nbreak"));
/// ```
#[must_use]
pub fn is_bare_value(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_bare_value_char)
}

/// Returns `true` if an object key may be written without quotes.
///
/// Bare keys are non-empty runs of ASCII letters, digits, `-`, and `.`.
/// Underscores and non-ASCII characters force quoting even though they are
/// fine in bare values.
///
/// # Examples
///
/// ```rust
/// use serde_cton::grammar::is_bare_key;
///
/// assert!(is_bare_key("name"));
/// assert!(is_bare_key("user.email"));
/// assert!(is_bare_key("x-id"));
/// assert!(is_bare_key("42"));
///
/// assert!(!is_bare_key(""));
/// assert!(!is_bare_key("snake_case"));
/// assert!(!is_bare_key("Bonjour\u{e9}"));
/// assert!(!is_bare_key("two words"));
/// ```
#[must_use]
pub fn is_bare_key(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

#[inline]
fn is_bare_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c >= '\u{80}'
}

/// Appends `s` to `out` in quoted form.
///
/// If `s` is itself a complete, valid JSON document it is embedded verbatim
/// between the surrounding quotes with no re-escaping — the interior `"`
/// characters stay raw. This mirrors the tokenizer's escape-unaware quote
/// scan; the pair of quirks is part of the format and asserted on by fixture
/// tests. Any other string gets standard JSON escaping.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    if serde_json::from_str::<serde_json::Value>(s).is_ok() {
        out.push_str(s);
    } else {
        write_escaped(out, s);
    }
    out.push('"');
}

/// Appends `s` to `out` in quoted form for use as an object key.
///
/// Keys skip the JSON-document check: a key is quoted only because it fails
/// the narrow key class, and always gets standard escaping.
pub(crate) fn write_quoted_key(out: &mut String, s: &str) {
    out.push('"');
    write_escaped(out, s);
    out.push('"');
}

fn write_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}
