//! # `rootlog`
//!
//! Structured logging with a root context and level-colored console output.
//!
//! Every log call runs three steps in order, each of which can be replaced when building a [`Logger`]:
//!
//! 1. **Merge**: the logger's root label, the caller's [`Payload`] and the [`Level`] are merged into a
//!    [`LogRecord`].
//! 2. **Format**: a [`Format`](format::Format) renders the record, compact JSON by default.
//! 3. **Transport**: a [`Transport`](transport::Transport) delivers the rendered string, by default as
//!    one colored line on stdout, and returns what it delivered.
//!
//! ## Basic Usage
//!
//! ```rust
//! use rootlog::{Level, Logger};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = Logger::new("driver");
//!
//! // Plain messages are recorded under `message`.
//! logger.log("Hello", Level::ERROR)?;
//!
//! // Structured fields are merged as-is, the level defaults to "info".
//! let fields = json!({ "speed": 88, "unit": "mph" });
//! logger.log(fields.as_object().unwrap().clone(), None)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use rootlog::Logger;
//! use rootlog::format::PrettyFormat;
//!
//! let logger = Logger::builder()
//!     .root("driver")
//!     .format(PrettyFormat)
//!     .transport_fn(|_, message| message.to_owned())
//!     .build();
//!
//! assert_eq!(
//!     logger.info("Hello").unwrap(),
//!     r#"[   info] Hello [root: "driver"]"#
//! );
//! ```
//!
//! Loggers can also be created from a TOML [`Config`].

#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod format;
mod level;
pub mod logger;
mod payload;
mod record;
pub mod transport;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use level::Level;
pub use logger::Logger;
pub use payload::{Payload, PayloadError};
pub use record::{LEVEL_KEY, LogRecord, MESSAGE_KEY, ROOT_KEY};
