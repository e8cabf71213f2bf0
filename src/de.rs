//! CTON decoding.
//!
//! Decoding runs in two stages with no backtracking in either:
//!
//! 1. [`tokenize`](Token) — a single linear pass splitting compact text into
//!    structural delimiters, quoted strings, and bare atoms
//! 2. [`Parser`] — recursive descent over the token sequence with one cursor,
//!    rebuilding the value tree
//!
//! The decoder is deliberately permissive: unterminated quoted strings and
//! unmatched structural delimiters truncate the current container at end of
//! input instead of raising. `decode` is therefore total over `&str` — it
//! degrades to a partial tree rather than failing.
//!
//! Two format quirks are preserved on purpose (see the crate-level docs):
//! the quote scan does not recognize escape sequences (`\"` ends a quoted
//! token early), and quoted object *keys* keep their raw token text, quote
//! characters included. Quoted *values* are unescaped with the standard JSON
//! rules.
//!
//! ## Usage
//!
//! ```rust
//! use serde_cton::{decode, Value};
//!
//! let value = decode("{a hello b[1 2]}");
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj.get("a").and_then(Value::as_str), Some("hello"));
//! ```

use crate::{CtonMap, Error, Number, Result, Value};
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{self, IntoDeserializer, Visitor};
use serde::forward_to_deserialize_any;

/// One lexical token of compact text.
///
/// Quoted tokens keep both surrounding quote characters (the closing quote
/// may be missing when input ends inside a string). Bare tokens are maximal
/// runs of non-separator, non-structural characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Quoted(&'a str),
    Bare(&'a str),
}

impl<'a> Token<'a> {
    /// The raw text of this token as it appeared in the input.
    ///
    /// Object keys are taken from here verbatim, which is why quoted keys
    /// keep their quote characters.
    fn raw(&self) -> &'a str {
        match self {
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Quoted(s) | Token::Bare(s) => s,
        }
    }
}

/// Scans compact text into a flat token sequence. Single pass, no lookahead.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                tokens.push(Token::LBrace);
                i += 1;
            }
            b'}' => {
                tokens.push(Token::RBrace);
                i += 1;
            }
            b'[' => {
                tokens.push(Token::LBracket);
                i += 1;
            }
            b']' => {
                tokens.push(Token::RBracket);
                i += 1;
            }
            b' ' | b'\t' | b'\n' => {
                i += 1;
            }
            b'"' => {
                // Consume through the next quote with no escape handling.
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' {
                    i += 1;
                }
                if i < bytes.len() {
                    i += 1;
                }
                tokens.push(Token::Quoted(&input[start..i]));
            }
            _ => {
                let start = i;
                while i < bytes.len() && !is_token_boundary(bytes[i]) {
                    i += 1;
                }
                tokens.push(Token::Bare(&input[start..i]));
            }
        }
    }

    tokens
}

#[inline]
fn is_token_boundary(b: u8) -> bool {
    matches!(b, b'{' | b'}' | b'[' | b']' | b' ' | b'\t' | b'\n' | b'"')
}

/// Recursive-descent parser over the token sequence.
///
/// One cursor, no backtracking. Each container parse owns its own loop; the
/// only shared state is the cursor position.
pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: Vec<Token<'a>>) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes one value. Empty input yields `Null`; a stray closing
    /// delimiter in value position is consumed and also yields `Null`.
    pub(crate) fn parse_value(&mut self) -> Value {
        match self.next() {
            None => Value::Null,
            Some(Token::LBrace) => self.parse_object(),
            Some(Token::LBracket) => self.parse_array(),
            Some(Token::RBrace) | Some(Token::RBracket) => Value::Null,
            Some(Token::Quoted(raw)) => Value::String(unescape_quoted(raw)),
            Some(Token::Bare(text)) => classify_bare(text),
        }
    }

    fn parse_object(&mut self) -> Value {
        let mut map = CtonMap::new();
        loop {
            match self.peek() {
                None => break,
                Some(Token::RBrace) => {
                    self.next();
                    break;
                }
                Some(token) => {
                    // Keys are the raw token text: quoted keys stay quoted.
                    let key = token.raw().to_string();
                    self.next();
                    let value = self.parse_value();
                    map.insert(key, value);
                }
            }
        }
        Value::Object(map)
    }

    fn parse_array(&mut self) -> Value {
        let mut elements = Vec::new();
        loop {
            match self.peek() {
                None => break,
                Some(Token::RBracket) => {
                    self.next();
                    break;
                }
                Some(_) => elements.push(self.parse_value()),
            }
        }
        Value::Array(elements)
    }
}

/// Classifies a bare atom: literal, number, or verbatim string.
///
/// Number recognition special-cases the three non-finite spellings first,
/// then tries integer and float parses. A float parse that yields a
/// non-finite value is rejected so that runs like `nan` or `inf` stay
/// strings; only the exact spellings above name the special numbers. This
/// also covers overflowing literals: `1e999` decodes as the string
/// `"1e999"`, not as `Infinity`.
fn classify_bare(text: &str) -> Value {
    match text {
        "null" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "NaN" => return Value::Number(Number::NaN),
        "Infinity" => return Value::Number(Number::Infinity),
        "-Infinity" => return Value::Number(Number::NegativeInfinity),
        _ => {}
    }
    if let Ok(i) = text.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }
    if let Ok(f) = text.parse::<f64>() {
        if f.is_finite() {
            return Value::Number(Number::Float(f));
        }
    }
    Value::String(text.to_string())
}

/// Decodes the content of a quoted token with JSON string-literal rules.
///
/// The raw text includes the opening quote and, when the input didn't end
/// mid-string, the closing quote. Unknown escapes are preserved literally;
/// invalid `\u` sequences fall back to U+FFFD rather than failing, keeping
/// the decoder total.
fn unescape_quoted(raw: &str) -> String {
    let content = raw
        .strip_prefix('"')
        .unwrap_or(raw)
        .strip_suffix('"')
        .unwrap_or_else(|| raw.strip_prefix('"').unwrap_or(raw));

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('u') => result.push(parse_unicode_escape(&mut chars)),
            Some(other) => {
                // Unknown escape: keep it literally.
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

fn parse_unicode_escape(chars: &mut std::str::Chars<'_>) -> char {
    fn hex4(chars: &mut std::str::Chars<'_>) -> Option<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = chars.next()?.to_digit(16)?;
            code = code * 16 + digit;
        }
        Some(code)
    }

    let Some(code) = hex4(chars) else {
        return '\u{FFFD}';
    };
    // High surrogate: try to combine with a following \uXXXX low surrogate.
    if (0xD800..0xDC00).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = hex4(&mut lookahead) {
                if (0xDC00..0xE000).contains(&low) {
                    *chars = lookahead;
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined).unwrap_or('\u{FFFD}');
                }
            }
        }
        return '\u{FFFD}';
    }
    char::from_u32(code).unwrap_or('\u{FFFD}')
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(n) => visitor.visit_f64(n.as_f64()),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => {
                let mut seq = SeqDeserializer::new(arr.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(obj) => {
                let mut map = MapDeserializer::new(obj.into_iter());
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            // Unit variants decode from bare strings.
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            // Newtype variants decode from single-entry objects.
            Value::Object(obj) => {
                let mut iter = obj.into_iter();
                let (tag, value) = iter
                    .next()
                    .ok_or_else(|| Error::custom("expected a single-entry object for enum"))?;
                if iter.next().is_some() {
                    return Err(Error::custom("expected a single-entry object for enum"));
                }
                visitor.visit_enum(EnumDeserializer { tag, value })
            }
            other => Err(Error::custom(format!(
                "cannot deserialize enum from {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

struct EnumDeserializer {
    tag: String,
    value: Value,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let tag = seed.deserialize(self.tag.into_deserializer())?;
        Ok((tag, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(Error::custom(format!(
                "expected unit variant, found {}",
                other.kind()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => {
                let mut seq = SeqDeserializer::new(arr.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            other => Err(Error::custom(format!(
                "expected tuple variant, found {}",
                other.kind()
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => {
                let mut map = MapDeserializer::new(obj.into_iter());
                let value = visitor.visit_map(&mut map)?;
                map.end()?;
                Ok(value)
            }
            other => Err(Error::custom(format!(
                "expected struct variant, found {}",
                other.kind()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cton;

    fn parse(input: &str) -> Value {
        Parser::new(tokenize(input)).parse_value()
    }

    #[test]
    fn test_tokenizer_splits_structure_and_atoms() {
        let tokens = tokenize("{a hello b[1 2]}");
        assert_eq!(
            tokens,
            vec![
                Token::LBrace,
                Token::Bare("a"),
                Token::Bare("hello"),
                Token::Bare("b"),
                Token::LBracket,
                Token::Bare("1"),
                Token::Bare("2"),
                Token::RBracket,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_tokenizer_keeps_quotes_on_quoted_tokens() {
        let tokens = tokenize("{a \"hello world\"}");
        assert_eq!(tokens[2], Token::Quoted("\"hello world\""));
    }

    #[test]
    fn test_tokenizer_quote_scan_is_escape_unaware() {
        // The backslash does not protect the quote: the first token ends at
        // the second quote character.
        let tokens = tokenize(r#""a\" b"#);
        assert_eq!(tokens[0], Token::Quoted(r#""a\""#));
        assert_eq!(tokens[1], Token::Bare("b"));
    }

    #[test]
    fn test_tokenizer_unterminated_quote_runs_to_end() {
        let tokens = tokenize("\"never ends");
        assert_eq!(tokens, vec![Token::Quoted("\"never ends")]);
    }

    #[test]
    fn test_tokenizer_separators_produce_no_tokens() {
        assert_eq!(tokenize("  \t\n "), vec![]);
        assert_eq!(
            tokenize("a\tb\nc"),
            vec![Token::Bare("a"), Token::Bare("b"), Token::Bare("c")]
        );
    }

    #[test]
    fn test_bare_atom_classification() {
        assert_eq!(classify_bare("null"), Value::Null);
        assert_eq!(classify_bare("true"), Value::Bool(true));
        assert_eq!(classify_bare("false"), Value::Bool(false));
        assert_eq!(classify_bare("42"), Value::Number(Number::Integer(42)));
        assert_eq!(classify_bare("-7"), Value::Number(Number::Integer(-7)));
        assert_eq!(classify_bare("2.5"), Value::Number(Number::Float(2.5)));
        assert_eq!(classify_bare("1e3"), Value::Number(Number::Float(1000.0)));
        assert_eq!(classify_bare("NaN"), Value::Number(Number::NaN));
        assert_eq!(classify_bare("Infinity"), Value::Number(Number::Infinity));
        assert_eq!(
            classify_bare("-Infinity"),
            Value::Number(Number::NegativeInfinity)
        );
        assert_eq!(classify_bare("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_only_exact_spellings_name_special_numbers() {
        assert_eq!(classify_bare("nan"), Value::String("nan".to_string()));
        assert_eq!(classify_bare("inf"), Value::String("inf".to_string()));
        assert_eq!(
            classify_bare("infinity"),
            Value::String("infinity".to_string())
        );
        // Overflowing literals stay strings rather than becoming Infinity.
        assert_eq!(classify_bare("1e999"), Value::String("1e999".to_string()));
        assert_eq!(
            classify_bare("-1e999"),
            Value::String("-1e999".to_string())
        );
    }

    #[test]
    fn test_parses_nested_containers() {
        assert_eq!(
            parse("{a hello b[1 2]}"),
            cton!({"a": "hello", "b": [1, 2]})
        );
        assert_eq!(parse("{a{} b[]}"), cton!({"a": {}, "b": []}));
    }

    #[test]
    fn test_quoted_values_are_unescaped() {
        assert_eq!(
            parse(r#"[ "line1\nline2" ]"#),
            cton!(["line1\nline2"])
        );
        assert_eq!(parse(r#"["tab\there"]"#), cton!(["tab\there"]));
        assert_eq!(parse(r#"["A"]"#), cton!(["A"]));
    }

    #[test]
    fn test_surrogate_pairs_combine() {
        assert_eq!(parse(r#"["😀"]"#), cton!(["\u{1F600}"]));
    }

    #[test]
    fn test_quoted_keys_stay_raw() {
        let value = parse(r#"{"my key" 1}"#);
        let obj = value.as_object().unwrap();
        // The key keeps its quote characters: that is the decoder's contract.
        assert!(obj.contains_key("\"my key\""));
        assert!(!obj.contains_key("my key"));
    }

    #[test]
    fn test_truncated_containers_stop_at_end_of_input() {
        assert_eq!(parse("{a 1 b"), cton!({"a": 1, "b": null}));
        assert_eq!(parse("[1 2"), cton!([1, 2]));
        assert_eq!(parse("{a[1"), cton!({"a": [1]}));
    }

    #[test]
    fn test_key_without_value_maps_to_null() {
        assert_eq!(parse("{a}"), cton!({"a": null}));
    }

    #[test]
    fn test_empty_input_is_null() {
        assert_eq!(parse(""), Value::Null);
        assert_eq!(parse("   "), Value::Null);
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        assert_eq!(parse("[1] [2]"), cton!([1]));
    }
}
