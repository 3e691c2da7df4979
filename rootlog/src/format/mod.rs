//! Turning a [`LogRecord`] into the string handed to a transport.
//!
//! # Format Trait
//!
//! The [`Format`] trait is the seam for custom formatters. Closures can be used through [`FormatFn`],
//! or directly with [`Builder::format_fn`](crate::logger::Builder::format_fn).
//!
//! # Built-in Formatters
//!
//! - [`JsonFormat`] - Compact JSON, the default
//! - [`PrettyFormat`] - A single human readable line

mod json;
mod pretty;

use serde::{Deserialize, Serialize};

pub use json::JsonFormat;
pub use pretty::PrettyFormat;

use crate::record::LogRecord;

/// Trait for rendering a log record as a string.
///
/// # Examples
///
/// ```rust
/// use rootlog::LogRecord;
/// use rootlog::format::{Format, FormatError};
///
/// struct LevelOnly;
///
/// impl Format for LevelOnly {
///     fn format(&self, record: &LogRecord) -> Result<String, FormatError> {
///         record
///             .level()
///             .map(str::to_owned)
///             .ok_or_else(|| FormatError::Other("record without a level".into()))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// Renders `record`.
    fn format(&self, record: &LogRecord) -> Result<String, FormatError>;
}

impl<T> Format for Box<T>
where
    T: Format + ?Sized,
{
    fn format(&self, record: &LogRecord) -> Result<String, FormatError> {
        (**self).format(record)
    }
}

/// Adapts an infallible closure into a [`Format`].
#[derive(Clone)]
pub struct FormatFn<F>(pub F);

impl<F> Format for FormatFn<F>
where
    F: Fn(&LogRecord) -> String + Send + Sync,
{
    fn format(&self, record: &LogRecord) -> Result<String, FormatError> {
        Ok((self.0)(record))
    }
}

impl<F> core::fmt::Debug for FormatFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FormatFn").finish_non_exhaustive()
    }
}

/// Errors that can occur while formatting a record.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// The record could not be serialized as JSON.
    #[error("failed to serialize log record")]
    Json(#[from] serde_json::Error),

    /// A custom formatter failed.
    #[error("{0}")]
    Other(String),
}

/// Selects one of the built-in formatters, used by [`Config`](crate::Config).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FormatKind {
    /// [`JsonFormat`].
    #[default]
    Json,

    /// [`PrettyFormat`].
    Pretty,
}

impl FormatKind {
    /// Creates the formatter this kind names.
    pub fn formatter(self) -> Box<dyn Format> {
        match self {
            FormatKind::Json => Box::new(JsonFormat),
            FormatKind::Pretty => Box::new(PrettyFormat),
        }
    }
}
