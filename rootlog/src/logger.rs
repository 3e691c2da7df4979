//! The [`Logger`] and its [`Builder`].

use core::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::format::{Format, FormatFn, JsonFormat};
use crate::level::Level;
use crate::payload::Payload;
use crate::record::LogRecord;
use crate::transport::{ConsoleTransport, Transport, TransportFn};

/// The root label used when none is configured.
pub const DEFAULT_ROOT: &str = "root";

/// Merges payloads into a root context, formats them and hands them to a transport.
///
/// A logger holds no per-call state, so a single instance can be shared freely.
///
/// # Examples
///
/// ```rust
/// use rootlog::{Level, Logger};
///
/// let logger = Logger::new("driver");
/// let delivered = logger.log("Hello", Level::ERROR).unwrap();
///
/// assert_eq!(
///     delivered,
///     "\u{1b}[31m{\"root\":\"driver\",\"message\":\"Hello\",\"level\":\"error\"}\u{1b}[0m"
/// );
/// ```
pub struct Logger {
    root: String,
    format: Box<dyn Format>,
    transport: Box<dyn Transport>,
}

impl Logger {
    /// Creates a logger with the default formatter and transport.
    pub fn new(root: impl Into<String>) -> Self {
        Self::builder().root(root).build()
    }

    /// Creates a logger from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::builder().config(config).build()
    }

    /// Returns a [`Builder`] to override the root, formatter or transport.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the root label merged into every record.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Logs `payload` at `level`, returning what the transport delivered.
    ///
    /// `level` is not validated, an absent level is recorded as `"info"` but passed to the transport
    /// as `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootlog::{Level, Logger};
    /// use serde_json::json;
    ///
    /// let logger = Logger::builder()
    ///     .format_fn(|record| record.to_owned().into_value().to_string())
    ///     .transport_fn(|_, message| message.to_owned())
    ///     .build();
    ///
    /// let fields = json!({ "user": "alice" }).as_object().unwrap().clone();
    /// assert_eq!(
    ///     logger.log(fields, None).unwrap(),
    ///     r#"{"root":"root","user":"alice","level":"info"}"#
    /// );
    /// assert_eq!(
    ///     logger.log("Hi", Level::new("notice")).unwrap(),
    ///     r#"{"root":"root","message":"Hi","level":"notice"}"#
    /// );
    /// ```
    pub fn log(
        &self,
        payload: impl Into<Payload>,
        level: impl Into<Option<Level>>,
    ) -> Result<String, Error> {
        let level = level.into();
        let record = self.create_log_object(&payload.into(), level.as_ref());

        let message = self.format.format(&record).inspect_err(|error| {
            tracing::debug!(root = %self.root, ?error, "failed to format log record");
        })?;
        tracing::trace!(root = %self.root, level = ?level, %message, "formatted log record");

        let delivered = self
            .transport
            .transport(level.as_ref(), &message)
            .inspect_err(|error| {
                tracing::debug!(root = %self.root, ?error, "failed to deliver log record");
            })?;

        Ok(delivered)
    }

    /// Logs `payload` at [`Level::INFO`].
    pub fn info(&self, payload: impl Into<Payload>) -> Result<String, Error> {
        self.log(payload, Level::INFO)
    }

    /// Logs `payload` at [`Level::WARNING`].
    pub fn warning(&self, payload: impl Into<Payload>) -> Result<String, Error> {
        self.log(payload, Level::WARNING)
    }

    /// Logs `payload` at [`Level::ERROR`].
    pub fn error(&self, payload: impl Into<Payload>) -> Result<String, Error> {
        self.log(payload, Level::ERROR)
    }

    /// Logs `payload` at [`Level::DEBUG`].
    pub fn debug(&self, payload: impl Into<Payload>) -> Result<String, Error> {
        self.log(payload, Level::DEBUG)
    }

    /// Builds the record [`log`](Self::log) would format for `payload` and `level`.
    pub fn create_log_object(&self, payload: &Payload, level: Option<&Level>) -> LogRecord {
        LogRecord::new(Some(self.root.as_str()), payload, level)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`Logger`].
///
/// Anything not set falls back to the defaults: root [`DEFAULT_ROOT`], [`JsonFormat`] and
/// [`ConsoleTransport::DEFAULT`].
///
/// # Examples
///
/// ```rust
/// use rootlog::Logger;
/// use rootlog::format::PrettyFormat;
/// use rootlog::transport::{ColorMode, ConsoleTransport, Target};
///
/// let logger = Logger::builder()
///     .root("driver")
///     .format(PrettyFormat)
///     .transport(ConsoleTransport::new(Target::Stderr, ColorMode::Auto))
///     .build();
/// ```
#[derive(Default)]
#[must_use]
pub struct Builder {
    root: Option<String>,
    format: Option<Box<dyn Format>>,
    transport: Option<Box<dyn Transport>>,
}

impl Builder {
    /// Sets the root label.
    ///
    /// An empty label is treated like an unset one.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Sets the formatter.
    pub fn format(mut self, format: impl Format + 'static) -> Self {
        self.format = Some(Box::new(format));
        self
    }

    /// Sets a closure as formatter.
    pub fn format_fn<F>(self, format: F) -> Self
    where
        F: Fn(&LogRecord) -> String + Send + Sync + 'static,
    {
        self.format(FormatFn(format))
    }

    /// Sets the transport.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Sets a closure as transport.
    pub fn transport_fn<F>(self, transport: F) -> Self
    where
        F: Fn(Option<&Level>, &str) -> String + Send + Sync + 'static,
    {
        self.transport(TransportFn(transport))
    }

    /// Applies every setting of `config`.
    ///
    /// A missing or empty `root` in `config` keeps the root already set on the builder.
    pub fn config(mut self, config: &Config) -> Self {
        if let Some(root) = config.root.as_deref().filter(|root| !root.is_empty()) {
            self = self.root(root);
        }
        self.format(config.format.formatter())
            .transport(config.console.transport())
    }

    /// Creates the logger.
    pub fn build(self) -> Logger {
        let root = self
            .root
            .filter(|root| !root.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT.to_owned());

        tracing::debug!(
            %root,
            custom_format = self.format.is_some(),
            custom_transport = self.transport.is_some(),
            "created logger"
        );

        Logger {
            root,
            format: self.format.unwrap_or_else(|| Box::new(JsonFormat)),
            transport: self
                .transport
                .unwrap_or_else(|| Box::new(ConsoleTransport::DEFAULT)),
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("root", &self.root)
            .field("format", &self.format.is_some())
            .field("transport", &self.transport.is_some())
            .finish()
    }
}
