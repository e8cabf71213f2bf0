//! CTON encoding.
//!
//! This module provides the [`Encoder`] that walks a [`Value`] tree and
//! produces compact text, plus [`CtonValueSerializer`], the serde bridge that
//! turns any `T: Serialize` into a [`Value`].
//!
//! ## Overview
//!
//! The encoder is a depth-first walk with three pieces of per-call state:
//!
//! - a **string memo**: each distinct string value is classified and escaped
//!   once, then reused (the mapping from string to encoded form is pure)
//! - an **on-path identity set**: containers currently being encoded, tracked
//!   by address so a self-referential container fails fast instead of
//!   recursing forever
//! - a **depth counter**: one increment per descent into a child value,
//!   bounded by [`CtonOptions::max_depth`]
//!
//! All state lives inside the `Encoder` instance and is dropped when the call
//! returns; nothing is shared across encode calls.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_cton::{cton, encode};
//!
//! let value = cton!({"name": "Alice", "scores": [95, 87]});
//! assert_eq!(encode(&value).unwrap(), "{name Alice scores[95 87]}");
//! ```

use crate::grammar;
use crate::{CtonMap, CtonOptions, Error, Number, Result, Value};
use serde::{ser, Serialize};
use std::collections::{HashMap, HashSet};

/// The CTON encoder.
///
/// Converts a [`Value`] tree into compact text. Created via [`Encoder::new`]
/// with the options controlling the recursion limit; one instance serves one
/// `encode` call.
pub struct Encoder<'opts> {
    options: &'opts CtonOptions,
    output: String,
    // Addresses of containers on the current encoding path.
    on_path: HashSet<usize>,
    // Encoded form per distinct string value, valid for this call only.
    string_memo: HashMap<String, String>,
}

impl<'opts> Encoder<'opts> {
    pub fn new(options: &'opts CtonOptions) -> Self {
        Encoder {
            options,
            output: String::with_capacity(256),
            on_path: HashSet::new(),
            string_memo: HashMap::new(),
        }
    }

    /// Encodes a single value tree, consuming the encoder.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidTopLevel`] if `value` is not an object or array
    /// - [`Error::MaxDepthExceeded`] if nesting exceeds the configured limit
    /// - [`Error::CircularReference`] if a container is reached twice along
    ///   one path
    pub fn encode(mut self, value: &Value) -> Result<String> {
        if !value.is_container() {
            return Err(Error::invalid_top_level(value.kind()));
        }
        self.encode_value(value, 1)?;
        Ok(self.output)
    }

    fn encode_value(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Null => {
                self.output.push_str("null");
                Ok(())
            }
            Value::Bool(b) => {
                self.output.push_str(if *b { "true" } else { "false" });
                Ok(())
            }
            Value::Number(n) => {
                // Display reproduces the NaN/Infinity/-Infinity spellings.
                self.output.push_str(&n.to_string());
                Ok(())
            }
            Value::String(s) => {
                self.encode_string(s);
                Ok(())
            }
            Value::Array(elements) => {
                self.enter_container(value, depth)?;
                self.encode_array(elements, depth)?;
                self.leave_container(value);
                Ok(())
            }
            Value::Object(entries) => {
                self.enter_container(value, depth)?;
                self.encode_object(entries, depth)?;
                self.leave_container(value);
                Ok(())
            }
        }
    }

    fn encode_array(&mut self, elements: &[Value], depth: usize) -> Result<()> {
        self.output.push('[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.encode_value(element, depth + 1)?;
        }
        self.output.push(']');
        Ok(())
    }

    fn encode_object(&mut self, entries: &CtonMap, depth: usize) -> Result<()> {
        self.output.push('{');
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            self.encode_key(key);
            // Nested containers attach directly to the key: `key{...}`, `key[...]`.
            if !value.is_container() {
                self.output.push(' ');
            }
            self.encode_value(value, depth + 1)?;
        }
        self.output.push('}');
        Ok(())
    }

    fn encode_string(&mut self, s: &str) {
        if let Some(encoded) = self.string_memo.get(s) {
            self.output.push_str(encoded);
            return;
        }
        let encoded = if grammar::is_bare_value(s) {
            s.to_string()
        } else {
            let mut quoted = String::with_capacity(s.len() + 2);
            grammar::write_quoted(&mut quoted, s);
            quoted
        };
        self.output.push_str(&encoded);
        self.string_memo.insert(s.to_string(), encoded);
    }

    fn encode_key(&mut self, key: &str) {
        if grammar::is_bare_key(key) {
            self.output.push_str(key);
        } else {
            grammar::write_quoted_key(&mut self.output, key);
        }
    }

    fn enter_container(&mut self, value: &Value, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(Error::max_depth_exceeded(self.options.max_depth));
        }
        if !self.on_path.insert(value as *const Value as usize) {
            return Err(Error::CircularReference);
        }
        Ok(())
    }

    fn leave_container(&mut self, value: &Value) {
        self.on_path.remove(&(value as *const Value as usize));
    }
}

/// Serializer that builds a [`Value`] tree from any `T: Serialize`.
///
/// Used by [`crate::to_value`] and, indirectly, [`crate::to_string`].
pub struct CtonValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: CtonMap,
    current_key: Option<String>,
}

impl ser::Serializer for CtonValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::from_f64(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::from_f64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        // Externally tagged: {Variant <value>}
        let mut map = CtonMap::new();
        map.insert(variant.to_string(), value.serialize(CtonValueSerializer)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: CtonMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // String keys pass through; numeric keys are canonicalized to their
        // decimal string form before bareness testing happens downstream.
        match to_cton_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            Value::Number(n) => {
                self.current_key = Some(n.to_string());
                Ok(())
            }
            other => Err(Error::custom(format!(
                "map keys must be strings or numbers, found {}",
                other.kind()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_cton_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

fn to_cton_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(CtonValueSerializer)
}
