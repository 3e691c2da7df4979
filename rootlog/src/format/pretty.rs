use std::fmt::Write;

use super::{Format, FormatError};
use crate::record::{LEVEL_KEY, LogRecord, MESSAGE_KEY};

/// Formats a record as a human readable line.
///
/// The level is padded to the width of the longest conventional level, followed by the message (if it
/// is a string) and any remaining fields in record order:
///
/// ```text
/// [  error] Hello [root: "driver", attempt: 2]
/// ```
///
/// <div class="warning">
/// The output is not meant to be parsed, use [`JsonFormat`](super::JsonFormat) for that.
/// </div>
#[derive(Clone, Copy, Debug, Default)]
pub struct PrettyFormat;

impl Format for PrettyFormat {
    fn format(&self, record: &LogRecord) -> Result<String, FormatError> {
        let level = record.level().unwrap_or_default();
        let message = record.message();

        let mut output = format!("[{level:>7}]");
        if let Some(message) = message {
            output.push(' ');
            output.push_str(message);
        }

        // A non-string `message` is not used as the body, so it is listed with the other fields.
        let mut attributes = record
            .iter()
            .filter(|(key, _)| match key.as_str() {
                LEVEL_KEY => false,
                MESSAGE_KEY => message.is_none(),
                _ => true,
            })
            .peekable();

        if attributes.peek().is_some() {
            let mut separator = " [";
            for (key, value) in attributes {
                write!(output, "{separator}{key}: {value}")
                    .map_err(|error| FormatError::Other(error.to_string()))?;
                separator = ", ";
            }
            output.push(']');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::PrettyFormat;
    use crate::format::Format;
    use crate::level::Level;
    use crate::payload::Payload;
    use crate::record::LogRecord;

    #[test]
    fn smoke_test() {
        let calls = [
            (Payload::from("booting"), None),
            (
                Payload::try_from(json!({ "message": "booted", "truth": true, "lies": false }))
                    .unwrap(),
                Some(Level::DEBUG),
            ),
            (
                Payload::try_from(json!({ "message": "running", "mille": 1000, "milli": 0.001 }))
                    .unwrap(),
                Some(Level::INFO),
            ),
            (Payload::from("running late"), Some(Level::WARNING)),
            (
                Payload::try_from(json!({
                    "message": "A sun to read the dark",
                    "or": "A son to rend the dark",
                }))
                .unwrap(),
                Some(Level::ERROR),
            ),
            (Payload::from("terminating"), Some(Level::new("fatal"))),
        ];

        let output = calls
            .iter()
            .map(|(payload, level)| {
                let record = LogRecord::new(Some("boot"), payload, level.as_ref());
                PrettyFormat.format(&record).unwrap() + "\n"
            })
            .collect::<String>();

        assert_eq!(
            output,
            indoc! { r#"
                [   info] booting [root: "boot"]
                [  debug] booted [root: "boot", truth: true, lies: false]
                [   info] running [root: "boot", mille: 1000, milli: 0.001]
                [warning] running late [root: "boot"]
                [  error] A sun to read the dark [root: "boot", or: "A son to rend the dark"]
                [  fatal] terminating [root: "boot"]
            "# }
        );
    }

    #[test]
    fn without_message_or_attributes() {
        let record = LogRecord::new(None, &Payload::try_from(json!({})).unwrap(), None);
        assert_eq!(PrettyFormat.format(&record).unwrap(), "[   info]");
    }

    #[test]
    fn non_string_message_is_listed_as_attribute() {
        let record = LogRecord::new(
            None,
            &Payload::try_from(json!({ "message": 5 })).unwrap(),
            None,
        );
        assert_eq!(PrettyFormat.format(&record).unwrap(), "[   info] [message: 5]");
    }
}
