//! The mapping produced for every log call.
//!
//! A [`LogRecord`] is built by merging three layers in order, each later layer overwriting keys of the
//! earlier ones:
//!
//! 1. `{ "root": <root> }`, if a root is configured,
//! 2. the payload (text becomes `{ "message": <text> }`),
//! 3. `{ "level": <level or "info"> }`.
//!
//! Keys keep their insertion order, so the default JSON output reads `root`, payload keys, `level`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::level::Level;
use crate::payload::Payload;

/// Key under which the logger's root label is recorded.
pub const ROOT_KEY: &str = "root";

/// Key under which text payloads are recorded.
pub const MESSAGE_KEY: &str = "message";

/// Key under which the level is recorded.
pub const LEVEL_KEY: &str = "level";

/// The merged fields of a single log call.
///
/// # Examples
///
/// ```rust
/// use rootlog::{Level, LogRecord, Payload};
/// use serde_json::json;
///
/// let record = LogRecord::new(Some("driver"), &Payload::from("Hello"), Some(&Level::ERROR));
/// assert_eq!(
///     record.into_value(),
///     json!({ "root": "driver", "message": "Hello", "level": "error" })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Merges `root`, `payload` and `level` into a record.
    ///
    /// A missing `level` is recorded as [`Level::INFO`].
    pub fn new(root: Option<&str>, payload: &Payload, level: Option<&Level>) -> Self {
        let mut fields = Map::new();

        if let Some(root) = root {
            fields.insert(ROOT_KEY.to_owned(), Value::from(root));
        }

        match payload {
            Payload::Text(text) => {
                fields.insert(MESSAGE_KEY.to_owned(), Value::from(text.as_str()));
            }
            Payload::Fields(payload) => {
                for (key, value) in payload {
                    fields.insert(key.clone(), value.clone());
                }
            }
        }

        let level = level.cloned().unwrap_or_default();
        fields.insert(LEVEL_KEY.to_owned(), Value::from(level.as_str()));

        Self(fields)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the `root` field if it is a string.
    pub fn root(&self) -> Option<&str> {
        self.get(ROOT_KEY).and_then(Value::as_str)
    }

    /// Returns the `message` field if it is a string.
    pub fn message(&self) -> Option<&str> {
        self.get(MESSAGE_KEY).and_then(Value::as_str)
    }

    /// Returns the `level` field.
    ///
    /// Only `None` if a payload overwrote the level with a non-string value, which cannot happen for
    /// records built by [`LogRecord::new`].
    pub fn level(&self) -> Option<&str> {
        self.get(LEVEL_KEY).and_then(Value::as_str)
    }

    /// Iterates all fields in record order.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Converts into the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Converts into a JSON object value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl<'a> IntoIterator for &'a LogRecord {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::LogRecord;
    use crate::level::Level;
    use crate::payload::Payload;

    fn fields(value: serde_json::Value) -> Payload {
        Payload::try_from(value).unwrap()
    }

    #[test]
    fn text_payload_becomes_message() {
        let record = LogRecord::new(Some("root"), &Payload::from("Hello World"), Some(&Level::INFO));

        assert_eq!(record.root(), Some("root"));
        assert_eq!(record.message(), Some("Hello World"));
        assert_eq!(record.level(), Some("info"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn fields_payload_is_flattened() {
        let record = LogRecord::new(
            Some("root"),
            &fields(json!({ "message": "Hello World", "attempt": 2 })),
            Some(&Level::ERROR),
        );

        assert_eq!(
            record.into_value(),
            json!({ "root": "root", "message": "Hello World", "attempt": 2, "level": "error" })
        );
    }

    #[test]
    fn missing_level_defaults_to_info() {
        let record = LogRecord::new(Some("root"), &Payload::from("Hello World"), None);
        assert_eq!(record.level(), Some("info"));
    }

    #[test]
    fn missing_root_is_omitted() {
        let record = LogRecord::new(None, &Payload::from("Hi"), None);
        assert_eq!(record.into_value(), json!({ "message": "Hi", "level": "info" }));
    }

    #[test]
    fn payload_overrides_root() {
        let record = LogRecord::new(
            Some("driver"),
            &fields(json!({ "root": "passenger" })),
            None,
        );
        assert_eq!(record.root(), Some("passenger"));
    }

    #[test]
    fn level_overrides_payload() {
        let record = LogRecord::new(
            Some("driver"),
            &fields(json!({ "level": "fatal", "code": 7 })),
            Some(&Level::WARNING),
        );
        assert_eq!(record.level(), Some("warning"));

        // Even the default level wins over a payload provided one.
        let record = LogRecord::new(Some("driver"), &fields(json!({ "level": "fatal" })), None);
        assert_eq!(record.level(), Some("info"));
    }

    #[test]
    fn unconventional_levels_are_recorded_verbatim() {
        let record = LogRecord::new(None, &Payload::from("x"), Some(&Level::new("NOTICE")));
        assert_eq!(record.level(), Some("NOTICE"));
    }

    #[test]
    fn keys_keep_merge_order() {
        let record = LogRecord::new(
            Some("driver"),
            &fields(json!({ "zeta": 1, "alpha": 2 })),
            Some(&Level::DEBUG),
        );
        let keys: Vec<_> = record.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["root", "zeta", "alpha", "level"]);
    }

    #[test]
    fn overwritten_key_keeps_its_position() {
        let record = LogRecord::new(
            Some("driver"),
            &fields(json!({ "user": "alice", "root": "passenger" })),
            None,
        );
        let keys: Vec<_> = record.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["root", "user", "level"]);
    }
}
