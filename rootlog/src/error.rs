use crate::format::FormatError;
use crate::transport::TransportError;

/// Errors returned by [`Logger::log`](crate::Logger::log).
///
/// A failing step aborts the call, nothing is written for a record that could not be formatted.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The formatter failed.
    #[error("formatting the log record failed")]
    Format(#[from] FormatError),

    /// The transport failed.
    #[error("delivering the log record failed")]
    Transport(#[from] TransportError),
}
