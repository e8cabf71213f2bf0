//! CTON Format Specification
//!
//! This module documents the CTON (Compact Tree Object Notation) format as
//! implemented by this library.
//!
//! # Overview
//!
//! CTON is a reversible text encoding for tree-structured JSON-like data,
//! designed to consume fewer language-model tokens than the equivalent JSON.
//! It drops the separators JSON spends tokens on (commas, colons, most
//! quotes) and relies on single spaces and the four structural delimiters to
//! keep the text unambiguous.
//!
//! ```text
//! JSON:  {"name": "Alice", "scores": [95, 87], "meta": {}}
//! CTON:  {name Alice scores[95 87] meta{}}
//! ```
//!
//! # Grammar
//!
//! ```text
//! value        := object | array | atom
//! object       := '{' (pair (' ' pair)*)? '}'
//! pair         := key (' ')? value        // no space if value starts with '{' or '['
//! array        := '[' (value (' ' value)*)? ']'
//! key          := bareKey | quotedString
//! atom         := 'null' | 'true' | 'false' | number | bareString | quotedString
//! bareKey      := [A-Za-z0-9._-]+        // no underscore: see Keys below
//! bareString   := [A-Za-z0-9._\--￿]+
//! quotedString := '"' <raw text up to next '"'> '"'
//! number       := decimal / scientific literal, or 'NaN' | 'Infinity' | '-Infinity'
//! ```
//!
//! (`bareKey` above lists the actual key class: ASCII letters, digits,
//! hyphen, and period. Underscore and non-ASCII characters are bare in
//! *values* but force quoting in *keys*.)
//!
//! # Objects and arrays
//!
//! Entries are separated by single spaces. A key is followed by a space and
//! its value, except when the value is itself a container: then the opening
//! `{` or `[` attaches directly to the key.
//!
//! ```text
//! {a 1 b[1 2] c{d hello}}
//! ```
//!
//! Empty containers are `{}` and `[]`. Key insertion order is significant
//! and preserved through a round trip.
//!
//! Only containers may appear at the top level of an encoded document; the
//! encoder rejects scalar input.
//!
//! # Strings
//!
//! Strings are unquoted whenever every character is an ASCII letter, digit,
//! `-`, `.`, `_`, or any code point at or above U+0080, and the string is
//! non-empty. Everything else is quoted with JSON-style escapes (`\"`, `\\`,
//! `\n`, `\r`, `\t`, `\uXXXX`).
//!
//! Because bare atoms are classified on decode by *content*, a string whose
//! text is exactly `null`, `true`, `false`, or a parseable number decodes as
//! that literal rather than as a string. This is a deliberate ambiguity the
//! format accepts in exchange for never quoting ordinary identifiers.
//!
//! ## The verbatim-JSON quirk
//!
//! A non-bare string whose text is a complete, valid JSON document is
//! embedded between quotes verbatim, with no re-escaping of its interior
//! `"` characters:
//!
//! ```text
//! value: {"key": "value"}     (a string containing JSON text)
//! CTON:  "{"key": "value"}"
//! ```
//!
//! Symmetrically, the tokenizer's quote scan is escape-unaware: a quoted
//! token runs from `"` to the very next `"`, even if that quote is preceded
//! by a backslash. Both halves of the quirk are part of the format contract
//! and are pinned by fixture tests; strings containing interior quotes do
//! not round-trip in general.
//!
//! # Numbers
//!
//! Numbers carry IEEE-754 double semantics. The three non-finite values are
//! spelled `NaN`, `Infinity`, and `-Infinity` in the compact text — they are
//! never silently dropped the way strict JSON encoders do. On decode, only
//! those exact spellings name the special values; a bare `nan` or `inf` is
//! an ordinary string.
//!
//! # Decoder tolerance
//!
//! Decoding never fails. Unterminated quoted strings and unmatched
//! structural delimiters truncate the current container at end of input,
//! a trailing key with no value maps to `null`, and tokens after the first
//! complete top-level value are ignored. Callers that need strictness
//! should validate the re-encoded output against the input.
//!
//! # Keys
//!
//! Object keys use a narrower bare class than values: ASCII letters,
//! digits, `-`, and `.` only. Numeric keys are canonicalized to their
//! decimal string form before the bareness test. On decode, keys are taken
//! as the raw token text: a quoted key keeps its quote characters.
