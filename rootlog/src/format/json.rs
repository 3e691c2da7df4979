use super::{Format, FormatError};
use crate::record::LogRecord;

/// Formats a record as a single line of compact JSON.
///
/// This is the default formatter.
///
/// # Examples
///
/// ```rust
/// use rootlog::format::{Format, JsonFormat};
/// use rootlog::{LogRecord, Payload};
///
/// let record = LogRecord::new(Some("driver"), &Payload::from("Hello"), None);
/// assert_eq!(
///     JsonFormat.format(&record).unwrap(),
///     r#"{"root":"driver","message":"Hello","level":"info"}"#
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn format(&self, record: &LogRecord) -> Result<String, FormatError> {
        Ok(serde_json::to_string(record)?)
    }
}
