//! Dynamic value trees and the generic tree walker.
//!
//! [`Value`] describes any document a writer can render. Its [`Emit`]
//! implementation walks the tree and issues structural calls in the order
//! every backend expects:
//!
//! - object keys in sorted order, independent of insertion order
//! - composite array elements wrapped in unnamed blocks and lists
//! - arrays holding only strings laid out compactly, `"a", "b"` on one line
//! - dates as RFC 3339 strings, so they take part in parameter substitution
//!
//! Wrap a tree in [`OmitEmpty`] to skip keyed nulls, empty arrays and empty
//! objects.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::{doc, to_string};
//!
//! let value = doc!({
//!     "name": "api",
//!     "ports": [80, 443]
//! });
//!
//! assert_eq!(
//!     to_string(&value).unwrap(),
//!     "{\n  \"name\": \"api\",\n  \"ports\": [\n    80,\n    443\n  ]\n}\n"
//! );
//! ```

use crate::writer::{Emit, StructuredWriter};
use crate::Map;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed document value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Date(DateTime<Utc>),
    /// A fragment already encoded in the target notation.
    Raw { fragment: Vec<u8>, compact: bool },
}

/// A numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramdoc::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Creates a raw fragment value.
    ///
    /// `compact` fragments are inserted exactly as given; the others are
    /// re-indented to the depth they land at.
    pub fn raw(fragment: impl Into<Vec<u8>>, compact: bool) -> Self {
        Value::Raw {
            fragment: fragment.into(),
            compact,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for null and for arrays or objects without elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramdoc::{Map, Value};
    ///
    /// assert!(Value::Null.is_empty());
    /// assert!(Value::Array(vec![]).is_empty());
    /// assert!(Value::Object(Map::new()).is_empty());
    /// assert!(!Value::from("").is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Emits `value` while skipping keyed nulls, empty arrays and empty objects.
///
/// An object counts as empty when every entry in it would be skipped, so
/// `{"keep": {"x": null}}` loses `keep` as well. Elements of arrays are
/// always emitted.
///
/// # Examples
///
/// ```rust
/// use paramdoc::{doc, to_string, OmitEmpty};
///
/// let value = doc!({ "a": 1, "b": null, "c": [] });
/// assert_eq!(to_string(&OmitEmpty(&value)).unwrap(), "{\n  \"a\": 1\n}\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OmitEmpty<'a>(pub &'a Value);

impl Emit for Value {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        emit_value(out, self, false);
    }

    fn check_root(&self) -> crate::Result<()> {
        check_root(self)
    }
}

impl Emit for OmitEmpty<'_> {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        emit_value(out, self.0, true);
    }

    fn check_root(&self) -> crate::Result<()> {
        check_root(self.0)
    }
}

impl Emit for Map {
    fn emit(&self, out: &mut dyn StructuredWriter) {
        emit_entries(out, self, false);
    }
}

fn check_root(value: &Value) -> crate::Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(crate::Error::unsupported_type(
            "document root must be an object",
        ))
    }
}

fn emit_value(out: &mut dyn StructuredWriter, value: &Value, omit_empty: bool) {
    match value {
        Value::Object(map) => emit_entries(out, map, omit_empty),
        Value::Array(items) => emit_elements(out, items, omit_empty),
        scalar => emit_element(out, scalar, false, omit_empty),
    }
}

fn emit_entries(out: &mut dyn StructuredWriter, map: &Map, omit_empty: bool) {
    for (key, value) in map.sorted_iter() {
        if omit_empty && is_vacant(value) {
            continue;
        }
        emit_keyed(out, key, value, omit_empty);
    }
}

// Empty once omitted entries are skipped. List elements are never skipped.
fn is_vacant(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.iter().all(|(_, v)| is_vacant(v)),
        other => other.is_empty(),
    }
}

fn emit_keyed(out: &mut dyn StructuredWriter, key: &str, value: &Value, omit_empty: bool) {
    match value {
        Value::Null => out.key_raw(key, b"null", true),
        Value::Bool(b) => out.key_bool(key, *b),
        Value::Number(Number::Integer(i)) => out.key_int(key, *i),
        Value::Number(Number::Float(f)) => out.key_float(key, *f),
        Value::String(s) => out.key_string(key, s),
        Value::Date(dt) => out.key_string(key, &dt.to_rfc3339()),
        Value::Raw { fragment, compact } => out.key_raw(key, fragment, *compact),
        Value::Array(items) => {
            out.begin_list(Some(key));
            emit_elements(out, items, omit_empty);
            out.end_list();
        }
        Value::Object(map) => {
            out.begin_block(Some(key), None);
            emit_entries(out, map, omit_empty);
            out.end_block();
        }
    }
}

fn emit_elements(out: &mut dyn StructuredWriter, items: &[Value], omit_empty: bool) {
    let compact = items.iter().all(Value::is_string);
    for item in items {
        emit_element(out, item, compact, omit_empty);
    }
}

fn emit_element(out: &mut dyn StructuredWriter, value: &Value, compact: bool, omit_empty: bool) {
    match value {
        Value::Null => out.raw(b"null", true),
        Value::Bool(b) => out.bool(*b),
        Value::Number(Number::Integer(i)) => out.int(*i),
        Value::Number(Number::Float(f)) => out.float(*f),
        Value::String(s) => out.string(s, compact),
        Value::Date(dt) => out.string(&dt.to_rfc3339(), false),
        Value::Raw { fragment, compact } => out.raw(fragment, *compact),
        Value::Array(items) => {
            out.begin_list(None);
            emit_elements(out, items, omit_empty);
            out.end_list();
        }
        Value::Object(map) => {
            out.begin_block(None, None);
            emit_entries(out, map, omit_empty);
            out.end_block();
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.sorted_iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::Raw { fragment, .. } => match std::str::from_utf8(fragment) {
                Ok(text) => serializer.serialize_str(text),
                Err(_) => serializer.serialize_bytes(fragment),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}
