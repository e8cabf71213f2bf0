//! # serde_cton
//!
//! A Serde-compatible codec for the CTON (Compact Tree Object Notation) format.
//!
//! ## What is CTON?
//!
//! CTON is a compact, reversible text encoding for tree-structured JSON-like
//! data, designed for efficient communication with Large Language Models
//! (LLMs). It spends no tokens on commas, colons, or quotes around ordinary
//! identifiers, while remaining mechanically decodable:
//!
//! ```text
//! JSON:  {"name": "Alice", "scores": [95, 87], "meta": {}}
//! CTON:  {name Alice scores[95 87] meta{}}
//! ```
//!
//! ## Key Features
//!
//! - **Token-Efficient**: single-space separators and bare atoms instead of
//!   JSON's punctuation
//! - **Reversible**: `decode(encode(v))` reproduces the value tree, key order
//!   included (objects are insertion-ordered)
//! - **Serde Compatible**: works with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Bounded**: encoder recursion is depth-limited (default 100) and guarded
//!   against self-referential containers
//! - **Tolerant decoding**: truncated or malformed compact text decodes to a
//!   partial tree instead of failing
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_cton::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let cton_string = to_string(&user).unwrap();
//! assert_eq!(cton_string, "{id 123 name Alice active true}");
//!
//! let user_back: User = from_str(&cton_string).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Dynamic Values with the cton! Macro
//!
//! ```rust
//! use serde_cton::{cton, encode, decode};
//!
//! let data = cton!({
//!     "name": "Alice",
//!     "tags": ["rust", "serde"]
//! });
//!
//! let text = encode(&data).unwrap();
//! assert_eq!(text, "{name Alice tags[rust serde]}");
//! assert_eq!(decode(&text), data);
//! ```
//!
//! ## Caveats
//!
//! CTON trades a small amount of fidelity for compactness; the trade-offs are
//! part of the format, not implementation accidents:
//!
//! - A *string* whose text is exactly `null`, `true`, `false`, or a parseable
//!   number encodes bare and decodes as that literal, not as a string.
//! - Strings containing `"` characters do not round-trip in general (see the
//!   verbatim-JSON quirk in the [`spec`] module).
//! - Top-level values must be objects or arrays; scalars are rejected.
//!
//! For the complete format description, see the [`spec`] module.

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod spec;
pub mod value;

pub use error::{Error, Result};
pub use map::CtonMap;
pub use options::CtonOptions;
pub use ser::{CtonValueSerializer, Encoder};
pub use value::{Number, Value};

use serde::{Deserialize, Serialize};
use std::io;

/// Encodes a [`Value`] tree to compact CTON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_cton::{cton, encode};
///
/// let value = cton!({"a": "hello", "b": [1, 2]});
/// assert_eq!(encode(&value).unwrap(), "{a hello b[1 2]}");
/// ```
///
/// # Errors
///
/// Returns an error if the top-level value is not a container, if nesting
/// exceeds the depth limit, or if a container is reachable from itself.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &CtonOptions::default())
}

/// Encodes a [`Value`] tree to compact CTON text with custom options.
///
/// The single recognized option is the maximum recursion depth.
///
/// # Examples
///
/// ```rust
/// use serde_cton::{cton, encode_with_options, CtonOptions};
///
/// let value = cton!([[1], [2]]);
/// let options = CtonOptions::new().with_max_depth(2);
/// assert_eq!(encode_with_options(&value, &options).unwrap(), "[[1] [2]]");
/// ```
///
/// # Errors
///
/// Same as [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: &CtonOptions) -> Result<String> {
    Encoder::new(options).encode(value)
}

/// Decodes compact CTON text into a [`Value`] tree.
///
/// Decoding is total: malformed or truncated input degrades to a partial
/// tree (unfinished containers stop at end of input) rather than failing.
/// Empty input decodes to [`Value::Null`].
///
/// # Examples
///
/// ```rust
/// use serde_cton::{cton, decode};
///
/// assert_eq!(decode("{a hello}"), cton!({"a": "hello"}));
/// // Truncated input is tolerated:
/// assert_eq!(decode("[1 2"), cton!([1, 2]));
/// ```
#[must_use]
pub fn decode(text: &str) -> Value {
    let tokens = de::tokenize(text);
    de::Parser::new(tokens).parse_value()
}

/// Serializes any `T: Serialize` to a CTON string.
///
/// # Examples
///
/// ```rust
/// use serde_cton::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "{x 1 y 2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or does not produce a
/// top-level container.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &CtonOptions::default())
}

/// Serializes any `T: Serialize` to a CTON string with custom options.
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &CtonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    encode_with_options(&tree, options)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful for working with CTON data dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use serde_cton::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g., unsupported types).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(CtonValueSerializer)
}

/// Deserializes a [`Value`] tree into any `T: Deserialize`.
///
/// # Examples
///
/// ```rust
/// use serde_cton::{cton, from_value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let value = cton!({"x": 1, "y": 2});
/// let point: Point = from_value(value).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the tree does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(value)
}

/// Deserializes an instance of type `T` from a string of CTON text.
///
/// # Examples
///
/// ```rust
/// use serde_cton::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x 1 y 2}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Decoding itself never fails, but the decoded tree may not match the shape
/// of `T`; that mismatch is returned as an error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_value(decode(s))
}

/// Serializes any `T: Serialize` to a writer in CTON format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string(value)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserializes an instance of type `T` from an I/O stream of CTON text.
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the decoded tree
/// does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}
