use std::sync::{Arc, Mutex};

use super::{Transport, TransportError, colorize};
use crate::level::Level;

/// A transport for testing that stores all delivered lines in memory.
///
/// Each entry holds the level passed by the caller and the colored line, which is also what
/// [`Transport::transport`] returns, so results match [`ConsoleTransport::DEFAULT`].
///
/// [`ConsoleTransport::DEFAULT`]: super::ConsoleTransport::DEFAULT
#[derive(Debug)]
pub struct TestTransport {
    /// Shared vector storing all delivered lines.
    pub lines: Arc<Mutex<Vec<(Option<Level>, String)>>>,
}

impl TestTransport {
    /// Creates a new test transport and returns both the transport and a handle to the line storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rootlog::Logger;
    /// use rootlog::transport::TestTransport;
    ///
    /// let (transport, lines) = TestTransport::new();
    /// let logger = Logger::builder().transport(transport).build();
    ///
    /// logger.log("Hello", None).unwrap();
    /// assert_eq!(lines.lock().unwrap().len(), 1);
    /// ```
    pub fn new() -> (Self, Arc<Mutex<Vec<(Option<Level>, String)>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                lines: lines.clone(),
            },
            lines,
        )
    }
}

impl Transport for TestTransport {
    fn transport(&self, level: Option<&Level>, message: &str) -> Result<String, TransportError> {
        let line = colorize(level, message);
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level.cloned(), line.clone()));
        Ok(line)
    }
}
