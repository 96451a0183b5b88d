//! Coarse value kinds.
//!
//! Two values "have the same type" when they fall into the same [`ValueKind`].
//! Integers and floats are both [`ValueKind::Number`]; booleans are never
//! numbers.

use std::fmt;

use serde_json::Value;

/// The closed set of JSON value categories compared by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Number,
    String,
    Mapping,
    Sequence,
    Null,
}

impl ValueKind {
    /// Classifies `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Object(_) => Self::Mapping,
            Value::Array(_) => Self::Sequence,
            Value::Null => Self::Null,
        }
    }

    /// Returns `true` when `a` and `b` belong to the same kind.
    pub fn same(a: &Value, b: &Value) -> bool {
        Self::of(a) == Self::of(b)
    }

    /// Lowercase name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
