//! Crate-level error types
//!
//! Fatal errors surfaced by the control server itself. Per-request failures
//! (capacity, mount) have their own types in `registry` and `pipeline` and
//! map to HTTP status codes instead.

use std::ops::Range;

/// Error type for server startup and shutdown
#[derive(Debug)]
pub enum Error {
    /// No local port could be bound, neither the configured one nor the
    /// fallback range. The server does not start.
    Bind(Range<u16>),
    /// I/O error while serving
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Bind(ports) => {
                write!(f, "no control port available in {}-{}", ports.start, ports.end)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, Error>;
