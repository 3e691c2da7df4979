//! Delivering formatted records.
//!
//! A transport receives the level of the call (as passed by the caller, so possibly absent) and the
//! formatted record, writes it somewhere, and returns what it delivered. The returned string becomes
//! the result of [`Logger::log`](crate::Logger::log).
//!
//! # Level Colors
//!
//! The console transport picks a color by exact match on the level string:
//!
//! | level       | color  |
//! |-------------|--------|
//! | `"error"`   | red    |
//! | `"warning"` | yellow |
//! | `"debug"`   | blue   |
//! | other/none  | green  |
//!
//! # Built-in Transports
//!
//! - [`ConsoleTransport`] - Writes colored lines to stdout or stderr, the default
//! - [`TestTransport`] - Collects delivered lines in memory for testing purposes

mod console;
mod test_transport;

pub use colored::Color;
pub use console::{ColorMode, ConsoleTransport, Target};
#[doc(hidden)]
pub use test_transport::TestTransport;

use crate::level::Level;

/// Trait for delivering formatted log records.
///
/// # Examples
///
/// ```rust
/// use rootlog::Level;
/// use rootlog::transport::{Transport, TransportError};
///
/// struct Discard;
///
/// impl Transport for Discard {
///     fn transport(&self, _: Option<&Level>, message: &str) -> Result<String, TransportError> {
///         Ok(message.to_owned())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Delivers `message` logged at `level`, returning the delivered string.
    fn transport(&self, level: Option<&Level>, message: &str) -> Result<String, TransportError>;
}

impl<T> Transport for Box<T>
where
    T: Transport + ?Sized,
{
    fn transport(&self, level: Option<&Level>, message: &str) -> Result<String, TransportError> {
        (**self).transport(level, message)
    }
}

/// Adapts an infallible closure into a [`Transport`].
#[derive(Clone)]
pub struct TransportFn<F>(pub F);

impl<F> Transport for TransportFn<F>
where
    F: Fn(Option<&Level>, &str) -> String + Send + Sync,
{
    fn transport(&self, level: Option<&Level>, message: &str) -> Result<String, TransportError> {
        Ok((self.0)(level, message))
    }
}

impl<F> core::fmt::Debug for TransportFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("TransportFn").finish_non_exhaustive()
    }
}

/// Errors that can occur while delivering a record.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// Writing to the output failed.
    #[error("failed to write log line")]
    Io(#[from] std::io::Error),
}

/// Returns the console color for `level`.
///
/// Matching is exact: `"ERROR"` or `"warn"` get the default green like an absent level.
pub fn level_color(level: Option<&Level>) -> Color {
    match level.map(Level::as_str) {
        Some("error") => Color::Red,
        Some("warning") => Color::Yellow,
        Some("debug") => Color::Blue,
        _ => Color::Green,
    }
}

/// Wraps `message` in the ANSI escapes for `color`.
///
/// Unlike [`colored::Colorize`] this always emits the escapes, independent of the terminal or the
/// `NO_COLOR`/`CLICOLOR` environment.
pub fn paint(color: Color, message: &str) -> String {
    format!("\x1b[{}m{message}\x1b[0m", color.to_fg_str())
}

/// Shorthand for [`paint`]ing `message` in the [`level_color`] of `level`.
pub fn colorize(level: Option<&Level>, message: &str) -> String {
    paint(level_color(level), message)
}
