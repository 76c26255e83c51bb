//! HTTP/1.x request-line parser and serializer.
//!
//! The request-line is the first line a client sends:
//!
//! ```txt
//! <method> SP <uri> SP <version> CR LF
//! ```
//!
//! - `parse_line` tokenizes raw bytes into a borrowed `RequestLineRef`.
//! - `RequestLine` owns the three fields and serializes them back.
//! - `server` decodes a line off an async stream.
//! - `client` encodes a line onto an async stream.
//!
//! ```txt
//!   encode                 decode
//!        \                 /
//! client  -> request-line ->  server
//! ```
//!
//! # Example
//!
//! ```
//! use h1_request_line::RequestLine;
//!
//! let line = RequestLine::parse(b"GET /index.html HTTP/1.1\r\n")?;
//! assert_eq!(line.method(), b"GET");
//!
//! let wire = RequestLine::new("GET", "index.html", "HTTP/1.1")?.to_bytes()?;
//! assert_eq!(wire, b"GET /index.html HTTP/1.1\r\n");
//! # Ok::<(), h1_request_line::Error>(())
//! ```

#![forbid(unsafe_code, future_incompatible, rust_2018_idioms)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![cfg_attr(test, deny(warnings))]

/// The maximum length of a request-line the server decoder buffers.
pub const MAX_LINE_LENGTH: usize = 8 * 1024;

pub use error::{Error, Result};
pub use parse::parse_line;
pub use request_line::{RequestLine, RequestLineRef};

mod error;
mod parse;
mod request_line;

pub mod client;
pub mod server;
