//! `rootlog` CLI
//!
//! Logs a single message per invocation through a [`rootlog::Logger`].

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use rootlog::format::FormatKind;
use rootlog::transport::{ColorMode, Target};
use rootlog::{Config, Level, Logger, Payload};

/// Log a message with a root context
///
/// The message is merged with the root label and the level, formatted, and written as one line.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Arguments {
    /// The message to log.
    message: String,

    /// The severity of the message, conventionally one of info, warning, error or debug.
    #[arg(long)]
    level: Option<String>,

    /// The root label merged into the record.
    #[arg(long, env = "ROOTLOG_ROOT")]
    root: Option<String>,

    /// A TOML configuration file.
    #[arg(long, env = "ROOTLOG_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Interpret the message as a JSON string or object.
    #[arg(long)]
    json: bool,

    /// Overrides the configured formatter.
    #[arg(long, value_enum)]
    format: Option<FormatKind>,

    /// Overrides the configured output stream.
    #[arg(long, value_enum)]
    target: Option<Target>,

    /// Overrides the configured color mode.
    #[arg(long, value_enum)]
    color: Option<ColorMode>,
}

impl Arguments {
    /// Loads the configuration file, if any, and applies the overrides passed on the command line.
    pub fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading configuration from {path}"))?,
            None => Config::default(),
        };

        if let Some(root) = &self.root {
            config.root = Some(root.clone());
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(target) = self.target {
            config.console.target = target;
        }
        if let Some(color) = self.color {
            config.console.color = color;
        }

        Ok(config)
    }

    /// Converts the message into a payload.
    pub fn payload(&self) -> anyhow::Result<Payload> {
        if self.json {
            let value: serde_json::Value =
                serde_json::from_str(&self.message).context("parsing message as JSON")?;
            Payload::try_from(value).context("parsing message as payload")
        } else {
            Ok(Payload::from(self.message.as_str()))
        }
    }

    /// Returns the requested level.
    pub fn level(&self) -> Option<Level> {
        self.level.clone().map(Level::from)
    }

    /// Logs the message, returning the delivered line.
    pub fn run(self) -> anyhow::Result<String> {
        let config = self.config()?;
        tracing::debug!(?config, "resolved configuration");

        let logger = Logger::from_config(&config);
        let payload = self.payload()?;

        logger
            .log(payload, self.level())
            .context("logging the message")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rootlog::format::FormatKind;
    use rootlog::transport::{ColorMode, Target};
    use rootlog::{Level, Payload};
    use serde_json::json;

    use super::Arguments;

    fn parse(arguments: &[&str]) -> Arguments {
        Arguments::try_parse_from(std::iter::once("rootlog").chain(arguments.iter().copied()))
            .unwrap()
    }

    #[test]
    fn plain_message() {
        let arguments = parse(&["Hello"]);

        assert_eq!(arguments.payload().unwrap(), Payload::from("Hello"));
        assert_eq!(arguments.level(), None);
    }

    #[test]
    fn level_is_free_form() {
        let arguments = parse(&["Hello", "--level", "NOTICE"]);
        assert_eq!(arguments.level(), Some(Level::new("NOTICE")));
    }

    #[test]
    fn json_message() {
        let arguments = parse(&["--json", r#"{"user":"alice","attempt":2}"#]);

        assert_eq!(
            arguments.payload().unwrap(),
            Payload::try_from(json!({ "user": "alice", "attempt": 2 })).unwrap()
        );
    }

    #[test]
    fn json_message_must_be_string_or_object() {
        let error = parse(&["--json", "[1, 2]"]).payload().unwrap_err();
        assert_eq!(error.to_string(), "parsing message as payload");
        assert_eq!(
            error.root_cause().to_string(),
            "a payload must be a JSON string or object, got an array"
        );

        let error = parse(&["--json", "{not json"]).payload().unwrap_err();
        assert_eq!(error.to_string(), "parsing message as JSON");
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "root = \"from-file\"\nformat = \"pretty\"\n[console]\ncolor = \"auto\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["x", "--config", path]).config().unwrap();
        assert_eq!(config.root.as_deref(), Some("from-file"));
        assert_eq!(config.format, FormatKind::Pretty);
        assert_eq!(config.console.color, ColorMode::Auto);

        let config = parse(&[
            "x", "--config", path, "--root", "driver", "--format", "json", "--target", "stderr",
            "--color", "never",
        ])
        .config()
        .unwrap();
        assert_eq!(config.root.as_deref(), Some("driver"));
        assert_eq!(config.format, FormatKind::Json);
        assert_eq!(config.console.target, Target::Stderr);
        assert_eq!(config.console.color, ColorMode::Never);
    }

    #[test]
    fn missing_config_file() {
        let error = parse(&["x", "--config", "/nonexistent/rootlog.toml"])
            .config()
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            "loading configuration from /nonexistent/rootlog.toml"
        );
    }

    #[test]
    fn run_returns_delivered_line() {
        let delivered = parse(&["Hello", "--root", "driver", "--level", "error", "--color", "never"])
            .run()
            .unwrap();

        assert_eq!(
            delivered,
            r#"{"root":"driver","message":"Hello","level":"error"}"#
        );
    }
}
