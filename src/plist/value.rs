//! plist::value
//!
//! Typed parameter values.
//!
//! # Types
//!
//! Each value carries the type name used by the XML layout:
//!
//! | Variant       | XML type        |
//! |---------------|-----------------|
//! | `Bool`        | `bool`          |
//! | `Int`         | `int`           |
//! | `Double`      | `double`        |
//! | `String`      | `string`        |
//! | `IntArray`    | `Array(int)`    |
//! | `DoubleArray` | `Array(double)` |
//! | `StringArray` | `Array(string)` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parameter value.
///
/// Serde uses the untagged representation so that TOML documents read
/// naturally (`lo = [0.0, 0.0, 0.0]`). Variant order matters for
/// deserialization: integers are tried before doubles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    IntArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    StringArray(Vec<String>),
}

impl Value {
    /// The type name written to the XML `type` attribute.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::IntArray(_) => "Array(int)",
            Value::DoubleArray(_) => "Array(double)",
            Value::StringArray(_) => "Array(string)",
        }
    }

    /// Borrow the value as a slice of doubles.
    ///
    /// Integer arrays are not converted; callers that accept both must
    /// check explicitly.
    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            Value::DoubleArray(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Format a double so that it always reads back as a double.
///
/// Rust's `Debug` output is the shortest round-trip representation and
/// keeps the decimal point on integral values (`0.0`, not `0`).
pub(crate) fn format_double(x: f64) -> String {
    format!("{:?}", x)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T>(items: &[T], each: impl Fn(&T) -> String) -> String {
            items.iter().map(each).collect::<Vec<_>>().join(", ")
        }

        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Double(x) => write!(f, "{}", format_double(*x)),
            Value::String(s) => write!(f, "{}", s),
            Value::IntArray(v) => write!(f, "{{{}}}", join(v, |i| i.to_string())),
            Value::DoubleArray(v) => write!(f, "{{{}}}", join(v, |x| format_double(*x))),
            Value::StringArray(v) => write!(f, "{{{}}}", join(v, |s| s.clone())),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Value::IntArray(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::DoubleArray(v)
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::DoubleArray(v.to_vec())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::StringArray(v)
    }
}
