//! Tokenize a raw request-line.

use memchr::{memchr, memchr3, memmem, memrchr};

use crate::request_line::{RequestLineRef, CR, CRLF, LF, NUL, SP};
use crate::{Error, Result};

/// Parse `METHOD SP URI SP VERSION CRLF` out of the front of `raw`.
///
/// Only the bytes up to the first CRLF are read; anything after it is left
/// alone. The method ends at the first space of the line and the version
/// starts after the last one, so the uri may itself contain spaces. The
/// returned fields borrow from `raw`, which is never modified.
///
/// This is stricter than splitting on the first CRLF alone: a CR or LF that
/// is not part of that terminator is rejected rather than kept inside a field.
///
/// # Errors
///
/// Returns [`Error::MalformedStartLine`] when `raw` has no CRLF, when the line
/// holds a NUL or a stray CR or LF, when either separator is missing, or when
/// any field would be empty.
///
/// # Examples
///
/// ```
/// let line = h1_request_line::parse_line(b"GET /a b/c HTTP/1.1\r\nhost: x\r\n")?;
/// assert_eq!(line.method(), b"GET");
/// assert_eq!(line.uri(), b"/a b/c");
/// assert_eq!(line.version(), b"HTTP/1.1");
/// # Ok::<(), h1_request_line::Error>(())
/// ```
pub fn parse_line(raw: &[u8]) -> Result<RequestLineRef<'_>> {
    let end = memmem::find(raw, CRLF).ok_or(Error::MalformedStartLine)?;
    let line = &raw[..end];

    // Fields never carry a line break, and a NUL would end a C string early.
    if memchr3(NUL, CR, LF, line).is_some() {
        return Err(Error::MalformedStartLine);
    }

    let method_end = memchr(SP, line).ok_or(Error::MalformedStartLine)?;
    let (method, rest) = (&line[..method_end], &line[method_end + 1..]);

    let version_start = memrchr(SP, rest).ok_or(Error::MalformedStartLine)?;
    let (uri, version) = (&rest[..version_start], &rest[version_start + 1..]);

    if method.is_empty() || uri.is_empty() || version.is_empty() {
        return Err(Error::MalformedStartLine);
    }

    Ok(RequestLineRef {
        method,
        uri,
        version,
    })
}
