//! Type-erased scalar values carried by field descriptors

use serde::{Serialize, Serializer};
use std::fmt;

/// The current value of a scalar field
///
/// Integers are widened to 64 bits and strings are copied, so a value holds
/// no reference back to the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl FieldValue {
    /// Whether this is the zero value of its kind
    ///
    /// `false`, `0`, `0.0`, `'\0'` and `""` are empty. Templates use this to
    /// decide whether to emit a `value` attribute.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Bool(b) => !b,
            FieldValue::Int(i) => *i == 0,
            FieldValue::UInt(u) => *u == 0,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Char(c) => *c == '\0',
            FieldValue::Str(s) => s.is_empty(),
        }
    }

    /// Short name of the value's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "signed integer",
            FieldValue::UInt(_) => "unsigned integer",
            FieldValue::Float(_) => "float",
            FieldValue::Char(_) => "char",
            FieldValue::Str(_) => "string",
        }
    }

    /// Borrow the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Char(c) => write!(f, "{}", c),
            FieldValue::Str(s) => f.write_str(s),
        }
    }
}

// Untagged: templates see the bare scalar. Non-finite floats have no JSON
// number form and go out as their display text.
impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::UInt(u) => serializer.serialize_u64(*u),
            FieldValue::Float(v) if v.is_finite() => serializer.serialize_f64(*v),
            FieldValue::Float(v) => serializer.collect_str(v),
            FieldValue::Char(c) => serializer.serialize_char(*c),
            FieldValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Str(String::new())
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::Int(value as i64)
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::UInt(value as u64)
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<char> for FieldValue {
    fn from(value: char) -> Self {
        FieldValue::Char(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}
