//! Decode a request-line on the server.

use futures_lite::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use super::DecodeOptions;
use crate::request_line::{CRLF, LF};
use crate::{Error, RequestLine, Result};

/// Decode a request-line on the server.
///
/// Returns `Ok(None)` when the stream closes before any byte arrives. Bytes
/// after the CRLF stay in `reader`, so the same reader can be passed on to
/// whatever parses the headers.
pub async fn decode<R>(reader: &mut R) -> Result<Option<RequestLine>>
where
    R: AsyncBufRead + Unpin,
{
    decode_with_opts(reader, DecodeOptions::default()).await
}

/// Decode a request-line on the server with explicit options.
///
/// A `max_line_length` of 0 accepts no line at all: any byte on the stream
/// yields [`Error::LineTooLong`], while an empty stream still yields `Ok(None)`.
pub async fn decode_with_opts<R>(
    reader: &mut R,
    opts: DecodeOptions,
) -> Result<Option<RequestLine>>
where
    R: AsyncBufRead + Unpin,
{
    let max = opts.max_line_length;
    let mut reader = (&mut *reader).take(max as u64);
    let mut buf = Vec::new();

    // Keep reading until the buffer ends in CRLF. A bare LF does not end the
    // line; the parser rejects it once the CRLF arrives.
    loop {
        let bytes_read = reader.read_until(LF, &mut buf).await?;
        if bytes_read == 0 {
            // Prevent CWE-400 DDOS with overlong request lines. An exhausted
            // budget only counts when the stream still has bytes to give.
            if reader.limit() == 0 && !reader.get_mut().fill_buf().await?.is_empty() {
                log::debug!("request line exceeds {} bytes", max);
                return Err(Error::LineTooLong(max));
            }
            if buf.is_empty() {
                return Ok(None);
            }
            // The stream ended mid-line; let the parser reject it.
            break;
        }

        if buf.ends_with(CRLF) {
            break;
        }
    }

    match RequestLine::parse(&buf) {
        Ok(line) => {
            log::trace!("< {}", line);
            Ok(Some(line))
        }
        Err(err) => {
            log::debug!(
                "rejecting request line {:?}: {}",
                String::from_utf8_lossy(&buf),
                err
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[async_std::test]
    async fn eof_before_any_byte() {
        let mut reader: &[u8] = b"";
        assert!(decode(&mut reader).await.unwrap().is_none());
    }

    #[async_std::test]
    async fn leaves_headers_in_reader() {
        let mut reader: &[u8] = b"GET /chunked HTTP/1.1\r\nhost: localhost\r\n\r\n";
        let line = decode(&mut reader).await.unwrap().unwrap();
        assert_eq!(line.uri(), b"/chunked");
        assert_eq!(reader, &b"host: localhost\r\n\r\n"[..]);
    }

    #[async_std::test]
    async fn bare_lf_is_rejected() {
        let mut reader: &[u8] = b"GET /a\nb HTTP/1.1\r\n";
        let err = decode(&mut reader).await.unwrap_err();
        assert!(matches!(err, Error::MalformedStartLine));
        assert!(reader.is_empty());
    }

    #[async_std::test]
    async fn line_at_the_limit() {
        let opts = DecodeOptions {
            max_line_length: 16,
        };
        let mut reader: &[u8] = b"GET / HTTP/1.1\r\n";
        let line = decode_with_opts(&mut reader, opts).await.unwrap().unwrap();
        assert_eq!(line.version(), b"HTTP/1.1");
    }

    #[async_std::test]
    async fn eof_exactly_at_the_limit() {
        let opts = DecodeOptions {
            max_line_length: 14,
        };
        let mut reader: &[u8] = b"GET / HTTP/1.1";
        let err = decode_with_opts(&mut reader, opts).await.unwrap_err();
        assert!(matches!(err, Error::MalformedStartLine));
    }

    #[async_std::test]
    async fn zero_limit_with_data() {
        let opts = DecodeOptions { max_line_length: 0 };
        let mut reader: &[u8] = b"GET / HTTP/1.1\r\n";
        let err = decode_with_opts(&mut reader, opts).await.unwrap_err();
        assert!(matches!(err, Error::LineTooLong(0)));
        assert_eq!(reader, &b"GET / HTTP/1.1\r\n"[..]);
    }

    #[async_std::test]
    async fn zero_limit_on_empty_stream() {
        let opts = DecodeOptions { max_line_length: 0 };
        let mut reader: &[u8] = b"";
        assert!(decode_with_opts(&mut reader, opts).await.unwrap().is_none());
    }

    #[async_std::test]
    async fn line_over_the_limit() {
        let opts = DecodeOptions {
            max_line_length: 15,
        };
        let mut reader: &[u8] = b"GET / HTTP/1.1\r\n";
        let err = decode_with_opts(&mut reader, opts).await.unwrap_err();
        assert!(matches!(err, Error::LineTooLong(15)));
        assert!(err.is_malformed());
    }
}
