//! Read request-lines off an incoming connection.

mod decode;

pub use decode::{decode, decode_with_opts};

use crate::MAX_LINE_LENGTH;

/// Configure the decoder.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Bytes to buffer while looking for the CRLF. Defaults to 8kb.
    pub max_line_length: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}
