use std::io::Write;

use serde::{Deserialize, Serialize};

use super::{Transport, TransportError, colorize};
use crate::level::Level;

/// The standard stream a [`ConsoleTransport`] writes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Target {
    /// Standard output.
    #[default]
    Stdout,

    /// Standard error.
    Stderr,
}

/// When a [`ConsoleTransport`] adds color escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ColorMode {
    /// Always color, regardless of the output.
    #[default]
    Always,

    /// Never color.
    Never,

    /// Color if the environment and terminal support it, as detected by [`colored`].
    ///
    /// The detection looks at stdout for every [`Target`], including [`Target::Stderr`]. Use
    /// [`ColorMode::Always`] or [`ColorMode::Never`] when the two streams are redirected differently.
    Auto,
}

impl ColorMode {
    fn should_colorize(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}

/// Transport that writes every record as one line to a standard stream.
///
/// The line is wrapped in the color of its level (see the [module docs](super)) and the same string is
/// returned.
///
/// # Examples
///
/// ```rust
/// use rootlog::Level;
/// use rootlog::transport::{ConsoleTransport, Transport};
///
/// let delivered = ConsoleTransport::DEFAULT
///     .transport(Some(&Level::ERROR), "Hello")
///     .unwrap();
/// assert_eq!(delivered, "\u{1b}[31mHello\u{1b}[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsoleTransport {
    target: Target,
    color: ColorMode,
}

impl ConsoleTransport {
    /// A `const` version of `ConsoleTransport::default()`: colored lines on stdout.
    pub const DEFAULT: Self = Self::new(Target::Stdout, ColorMode::Always);

    /// Creates a transport for `target` using `color`.
    pub const fn new(target: Target, color: ColorMode) -> Self {
        Self { target, color }
    }

    /// Returns the stream this transport writes to.
    pub fn target(&self) -> Target {
        self.target
    }

    /// Returns the color mode of this transport.
    pub fn color(&self) -> ColorMode {
        self.color
    }

    /// Renders the line that will be written for `message`.
    pub fn render(&self, level: Option<&Level>, message: &str) -> String {
        if self.color.should_colorize() {
            colorize(level, message)
        } else {
            message.to_owned()
        }
    }
}

impl Transport for ConsoleTransport {
    fn transport(&self, level: Option<&Level>, message: &str) -> Result<String, TransportError> {
        let line = self.render(level, message);

        match self.target {
            Target::Stdout => write_line(&line, std::io::stdout().lock())?,
            Target::Stderr => write_line(&line, std::io::stderr().lock())?,
        }

        Ok(line)
    }
}

fn write_line(line: &str, mut output: impl Write) -> std::io::Result<()> {
    writeln!(output, "{line}")?;
    output.flush()
}
