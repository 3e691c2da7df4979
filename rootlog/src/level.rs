//! Severity levels attached to log calls.
//!
//! A [`Level`] is a free-form tag: any string is accepted and carried through to the record and the
//! transport unchanged. The conventional vocabulary is available as associated constants, and only the
//! exact lowercase spellings of those receive a dedicated console color.

use std::borrow::{Borrow, Cow};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The severity of a log call.
///
/// # Examples
///
/// ```rust
/// use rootlog::Level;
///
/// let level: Level = "error".parse().unwrap();
/// assert_eq!(level, Level::ERROR);
///
/// // Unknown levels are kept as-is.
/// let custom = Level::new("notice");
/// assert_eq!(custom.as_str(), "notice");
/// assert!(!custom.is_conventional());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(Cow<'static, str>);

impl Level {
    /// The "info" level, used when a call does not specify one.
    pub const INFO: Level = Level(Cow::Borrowed("info"));

    /// The "warning" level.
    pub const WARNING: Level = Level(Cow::Borrowed("warning"));

    /// The "error" level.
    pub const ERROR: Level = Level(Cow::Borrowed("error"));

    /// The "debug" level.
    pub const DEBUG: Level = Level(Cow::Borrowed("debug"));

    /// All conventional levels.
    pub const CONVENTIONAL: [Level; 4] = [Self::INFO, Self::WARNING, Self::ERROR, Self::DEBUG];

    /// Creates a level from any string.
    pub fn new(level: impl Into<Cow<'static, str>>) -> Self {
        Self(level.into())
    }

    /// Returns the level as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is one of [`Level::CONVENTIONAL`].
    pub fn is_conventional(&self) -> bool {
        Self::CONVENTIONAL.contains(self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Cow::Owned(s.to_owned())))
    }
}

impl From<&'static str> for Level {
    fn from(level: &'static str) -> Self {
        Self(Cow::Borrowed(level))
    }
}

impl From<String> for Level {
    fn from(level: String) -> Self {
        Self(Cow::Owned(level))
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Level {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
