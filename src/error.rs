use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// A specialized `Result` for request-line operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when building, parsing or serializing a request-line.
#[derive(Debug, Error)]
pub enum Error {
    /// A constructor argument does not fit in a request-line field.
    #[error("invalid request-line {0}")]
    InvalidArgument(&'static str),

    /// The buffer does not hold a well-formed `METHOD SP URI SP VERSION CRLF` line.
    #[error("malformed HTTP request start line")]
    MalformedStartLine,

    /// Allocating storage for a field or for the wire bytes failed.
    #[error("out of memory")]
    OutOfMemory,

    /// No CRLF was seen within the configured number of bytes.
    #[error("request line should be less than {0} bytes")]
    LineTooLong(usize),

    /// The underlying stream failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the peer sent bytes that cannot be a request-line.
    ///
    /// Connections that yield this error should be closed rather than reused.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedStartLine | Error::LineTooLong(_))
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::OutOfMemory
    }
}
