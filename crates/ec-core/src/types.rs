//! Record model: an insertion-ordered JSON object and a view over value kinds.

use serde_json::{Map, Number, Value};

/// A nested key-value event body. Keys keep their insertion order.
pub type Record = Map<String, Value>;

/// Borrowed view of a value, classified by the kinds the compactor inspects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    Null,
    Text(&'a str),
    Number(&'a Number),
    Nested(&'a Record),
    Sequence(&'a [Value]),
    /// Anything not inspected, e.g. booleans.
    Other(&'a Value),
}

impl<'a> ValueKind<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(s) => Self::Text(s),
            Value::Number(n) => Self::Number(n),
            Value::Object(map) => Self::Nested(map),
            Value::Array(items) => Self::Sequence(items),
            Value::Bool(_) => Self::Other(value),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Nested(_) => "nested",
            Self::Sequence(_) => "sequence",
            Self::Other(_) => "other",
        }
    }
}
