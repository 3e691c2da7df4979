//! The caller supplied part of a log call.

use serde_json::{Map, Value};

/// What a caller hands to [`Logger::log`](crate::Logger::log).
///
/// A payload is either a plain human readable message or a set of structured fields. Text is merged
/// into the record under the `message` key, fields are merged as-is.
///
/// # Examples
///
/// ```rust
/// use rootlog::Payload;
/// use serde_json::json;
///
/// let text = Payload::from("Hello");
/// assert_eq!(text, Payload::Text("Hello".into()));
///
/// let fields = Payload::try_from(json!({ "user": "alice", "attempt": 3 })).unwrap();
/// assert!(matches!(fields, Payload::Fields(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// A plain message, recorded as `{ "message": text }`.
    Text(String),

    /// Structured key/value pairs, shallow-merged into the record.
    Fields(Map<String, Value>),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Payload::Fields(fields)
    }
}

/// Error returned when a JSON value cannot be used as a [`Payload`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("a payload must be a JSON string or object, got {kind}")]
pub struct PayloadError {
    kind: &'static str,
}

impl TryFrom<Value> for Payload {
    type Error = PayloadError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = match value {
            Value::String(text) => return Ok(Payload::Text(text)),
            Value::Object(fields) => return Ok(Payload::Fields(fields)),
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::Array(_) => "an array",
        };

        Err(PayloadError { kind })
    }
}
