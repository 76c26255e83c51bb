//! Write request-lines onto an outgoing connection.

mod encode;

pub use encode::{encode, Encoder};
