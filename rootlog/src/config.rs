//! File based logger configuration.
//!
//! ```toml
//! root = "driver"
//! format = "pretty"
//!
//! [console]
//! target = "stderr"
//! color = "auto"
//! ```
//!
//! Every key is optional, unknown keys are rejected.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::format::FormatKind;
use crate::transport::{ColorMode, ConsoleTransport, Target};

/// Configuration of a [`Logger`](crate::Logger) using only built-in formatters and transports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The root label, [`DEFAULT_ROOT`](crate::logger::DEFAULT_ROOT) if unset.
    pub root: Option<String>,

    /// The formatter to use.
    pub format: FormatKind,

    /// Settings of the console transport.
    pub console: ConsoleConfig,
}

/// The `[console]` table of a [`Config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// The stream to write to.
    pub target: Target,

    /// When to add color escapes.
    pub color: ColorMode,
}

impl ConsoleConfig {
    /// Creates the transport this table describes.
    pub fn transport(&self) -> ConsoleTransport {
        ConsoleTransport::new(self.target, self.color)
    }
}

/// Errors that can occur when loading a [`Config`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// The file that was read.
        path: Utf8PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has unexpected keys or values.
    #[error("invalid configuration")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootlog::Config;
    /// use rootlog::format::FormatKind;
    ///
    /// let config = Config::from_toml(r#"root = "driver""#).unwrap();
    /// assert_eq!(config.root.as_deref(), Some("driver"));
    /// assert_eq!(config.format, FormatKind::Json);
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(%path, "read logger configuration");
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use camino::Utf8Path;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::{Config, ConfigError, ConsoleConfig};
    use crate::format::FormatKind;
    use crate::transport::{ColorMode, ConsoleTransport, Target};

    #[test]
    fn empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full() {
        let config = Config::from_toml(indoc! { r#"
            root = "driver"
            format = "pretty"

            [console]
            target = "stderr"
            color = "never"
        "# })
        .unwrap();

        assert_eq!(
            config,
            Config {
                root: Some("driver".to_owned()),
                format: FormatKind::Pretty,
                console: ConsoleConfig {
                    target: Target::Stderr,
                    color: ColorMode::Never,
                },
            }
        );
        assert_eq!(
            config.console.transport(),
            ConsoleTransport::new(Target::Stderr, ColorMode::Never)
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        let error = Config::from_toml(r#"rot = "driver""#).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)), "{error:?}");

        let error = Config::from_toml(indoc! { r#"
            [console]
            colour = "never"
        "# })
        .unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)), "{error:?}");
    }

    #[test]
    fn rejects_unknown_values() {
        let error = Config::from_toml(r#"format = "xml""#).unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)), "{error:?}");
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"root = "from-file""#).unwrap();

        let path = Utf8Path::from_path(file.path()).unwrap();
        let config = Config::from_file(path).unwrap();
        assert_eq!(config.root.as_deref(), Some("from-file"));
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(directory.path())
            .unwrap()
            .join("missing.toml");

        let error = Config::from_file(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }), "{error:?}");
        assert_eq!(error.to_string(), format!("failed to read {path}"));
    }
}
