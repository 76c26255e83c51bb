use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::{AsyncRead, AsyncWrite};

use crate::{RequestLine, Result};

/// A streaming request-line encoder.
///
/// Reading from it yields the serialized line, split across as many reads as
/// the caller's buffer size requires.
#[derive(Debug)]
pub struct Encoder {
    /// The serialized line.
    head: Vec<u8>,
    /// The amount of bytes read from `head`.
    head_bytes_read: usize,
}

impl Encoder {
    /// Create a new instance.
    pub fn new(line: &RequestLine) -> Result<Self> {
        let head = line.to_bytes()?;
        log::trace!("> {}", line);
        Ok(Self {
            head,
            head_bytes_read: 0,
        })
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.head.len() - self.head_bytes_read
    }
}

impl AsyncRead for Encoder {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let len = std::cmp::min(self.remaining(), buf.len());
        let range = self.head_bytes_read..self.head_bytes_read + len;
        buf[..len].copy_from_slice(&self.head[range]);
        self.head_bytes_read += len;
        Poll::Ready(Ok(len))
    }
}

/// Encode a request-line onto `writer`, returning the number of bytes written.
pub async fn encode<W>(line: &RequestLine, writer: &mut W) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let mut encoder = Encoder::new(line)?;
    let written = futures_lite::io::copy(&mut encoder, writer).await?;
    Ok(written)
}
