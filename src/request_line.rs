use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use http_types::{Method, Version};

use crate::parse::parse_line;
use crate::{Error, Result};

pub(crate) const SP: u8 = b' ';
pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';
pub(crate) const NUL: u8 = 0;
pub(crate) const CRLF: &[u8] = b"\r\n";

const SLASH: &[u8] = b"/";

/// The first line of an HTTP/1.x request: `METHOD SP URI SP VERSION CRLF`.
///
/// A `RequestLine` owns copies of its three fields and cannot be changed once
/// built. Use [`RequestLine::new`] to build one from separate parts, or
/// [`RequestLine::parse`] to read one off the wire.
///
/// # Examples
///
/// ```
/// use h1_request_line::RequestLine;
///
/// let line = RequestLine::parse(b"POST /axis2/services/echo HTTP/1.1\r\n")?;
/// assert_eq!(line.method(), b"POST");
/// assert_eq!(line.uri(), b"/axis2/services/echo");
/// assert_eq!(line.version(), b"HTTP/1.1");
/// # Ok::<(), h1_request_line::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RequestLine {
    method: Vec<u8>,
    uri: Vec<u8>,
    version: Vec<u8>,
}

/// A request-line borrowed from the buffer it was parsed out of.
///
/// This is what [`parse_line`] returns. Nothing is copied; the view lives as
/// long as the buffer does. Call [`RequestLineRef::to_owned_line`] to keep the
/// fields around after the buffer is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestLineRef<'a> {
    pub(crate) method: &'a [u8],
    pub(crate) uri: &'a [u8],
    pub(crate) version: &'a [u8],
}

impl RequestLine {
    /// Build a request-line from its three fields.
    ///
    /// Every field must be non-empty and free of CR, LF and NUL bytes. The
    /// method and version must not contain spaces; the uri may.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming the first field that breaks
    /// those rules, or [`Error::OutOfMemory`] if a copy cannot be allocated.
    pub fn new(
        method: impl AsRef<[u8]>,
        uri: impl AsRef<[u8]>,
        version: impl AsRef<[u8]>,
    ) -> Result<Self> {
        let (method, uri, version) = (method.as_ref(), uri.as_ref(), version.as_ref());
        check_field("method", method, false)?;
        check_field("uri", uri, true)?;
        check_field("version", version, false)?;

        Self::copy_from(method, uri, version)
    }

    /// Parse a raw buffer into an owned request-line.
    ///
    /// See [`parse_line`] for the accepted format.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        parse_line(raw)?.to_owned_line()
    }

    fn copy_from(method: &[u8], uri: &[u8], version: &[u8]) -> Result<Self> {
        Ok(Self {
            method: copy_field(method)?,
            uri: copy_field(uri)?,
            version: copy_field(version)?,
        })
    }

    /// The request method, e.g. `GET`.
    pub fn method(&self) -> &[u8] {
        &self.method
    }

    /// The request target exactly as it was given or received.
    pub fn uri(&self) -> &[u8] {
        &self.uri
    }

    /// The protocol version, e.g. `HTTP/1.1`.
    pub fn version(&self) -> &[u8] {
        &self.version
    }

    /// Borrow the fields as a [`RequestLineRef`].
    pub fn as_line_ref(&self) -> RequestLineRef<'_> {
        RequestLineRef {
            method: &self.method,
            uri: &self.uri,
            version: &self.version,
        }
    }

    /// The method as an `http_types::Method`, if it is one it knows.
    pub fn http_method(&self) -> Option<Method> {
        let method = std::str::from_utf8(&self.method).ok()?;
        Method::from_str(method).ok()
    }

    /// The version as an `http_types::Version`, if it is one it knows.
    pub fn http_version(&self) -> Option<Version> {
        match &self.version[..] {
            b"HTTP/0.9" => Some(Version::Http0_9),
            b"HTTP/1.0" => Some(Version::Http1_0),
            b"HTTP/1.1" => Some(Version::Http1_1),
            b"HTTP/2" | b"HTTP/2.0" => Some(Version::Http2_0),
            b"HTTP/3" | b"HTTP/3.0" => Some(Version::Http3_0),
            _ => None,
        }
    }

    /// Number of bytes [`RequestLine::to_bytes`] produces.
    pub fn encoded_len(&self) -> usize {
        self.wire_parts().iter().map(|part| part.len()).sum()
    }

    /// Serialize to `"<method> <uri> <version>\r\n"`.
    ///
    /// A uri that does not start with `/` gets one prepended on the wire. The
    /// stored uri keeps its original form.
    ///
    /// ```
    /// use h1_request_line::RequestLine;
    ///
    /// let line = RequestLine::new("GET", "foo", "HTTP/1.1")?;
    /// assert_eq!(line.to_bytes()?, b"GET /foo HTTP/1.1\r\n");
    /// assert_eq!(line.uri(), b"foo");
    /// # Ok::<(), h1_request_line::Error>(())
    /// ```
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.encoded_len())?;
        for part in self.wire_parts().iter() {
            buf.extend_from_slice(part);
        }
        Ok(buf)
    }

    /// Write the serialized line to a blocking sink.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for part in self.wire_parts().iter() {
            writer.write_all(part)?;
        }
        Ok(())
    }

    fn wire_parts(&self) -> [&[u8]; 7] {
        let slash: &[u8] = if self.uri.starts_with(SLASH) { b"" } else { SLASH };
        [
            &self.method[..],
            b" ",
            slash,
            &self.uri[..],
            b" ",
            &self.version[..],
            CRLF,
        ]
    }
}

impl<'a> RequestLineRef<'a> {
    /// The request method.
    pub fn method(&self) -> &'a [u8] {
        self.method
    }

    /// The request target.
    pub fn uri(&self) -> &'a [u8] {
        self.uri
    }

    /// The protocol version.
    pub fn version(&self) -> &'a [u8] {
        self.version
    }

    /// Copy the borrowed fields into an owned [`RequestLine`].
    pub fn to_owned_line(&self) -> Result<RequestLine> {
        RequestLine::copy_from(self.method, self.uri, self.version)
    }
}

impl TryFrom<RequestLineRef<'_>> for RequestLine {
    type Error = Error;

    fn try_from(line: RequestLineRef<'_>) -> Result<Self> {
        line.to_owned_line()
    }
}

impl TryFrom<&httparse::Request<'_, '_>> for RequestLine {
    type Error = Error;

    /// Take the start line out of a request `httparse` has finished with.
    fn try_from(req: &httparse::Request<'_, '_>) -> Result<Self> {
        let method = req.method.ok_or(Error::MalformedStartLine)?;
        let path = req.path.ok_or(Error::MalformedStartLine)?;
        let version = req.version.ok_or(Error::MalformedStartLine)?;

        RequestLine::new(method, path, format!("HTTP/1.{}", version))
    }
}

impl PartialEq<RequestLineRef<'_>> for RequestLine {
    fn eq(&self, other: &RequestLineRef<'_>) -> bool {
        self.as_line_ref() == *other
    }
}

impl PartialEq<RequestLine> for RequestLineRef<'_> {
    fn eq(&self, other: &RequestLine) -> bool {
        *self == other.as_line_ref()
    }
}

impl fmt::Display for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_line_ref(), f)
    }
}

impl fmt::Display for RequestLineRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            lossy(self.method),
            lossy(self.uri),
            lossy(self.version)
        )
    }
}

impl fmt::Debug for RequestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(f, "RequestLine", self.as_line_ref())
    }
}

impl fmt::Debug for RequestLineRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_fields(f, "RequestLineRef", *self)
    }
}

fn debug_fields(f: &mut fmt::Formatter<'_>, name: &str, line: RequestLineRef<'_>) -> fmt::Result {
    f.debug_struct(name)
        .field("method", &lossy(line.method))
        .field("uri", &lossy(line.uri))
        .field("version", &lossy(line.version))
        .finish()
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

fn check_field(name: &'static str, value: &[u8], allow_space: bool) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(name));
    }

    let forbidden = |byte: u8| matches!(byte, CR | LF | NUL) || (byte == SP && !allow_space);
    if value.iter().copied().any(forbidden) {
        return Err(Error::InvalidArgument(name));
    }

    Ok(())
}

fn copy_field(src: &[u8]) -> Result<Vec<u8>> {
    let mut field = Vec::new();
    field.try_reserve_exact(src.len())?;
    field.extend_from_slice(src);
    Ok(field)
}
