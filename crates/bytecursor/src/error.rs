//! Error type for cursor buffer operations.

use thiserror::Error;

/// Errors raised by [`ByteCursor`](crate::ByteCursor) operations.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A read, or a non-growing capacity check, ran past the end of the
    /// buffer.
    #[error("out of bounds: {needed} bytes needed at position {position}, buffer length {len}")]
    OutOfBounds {
        /// Cursor position at the time of the check.
        position: usize,
        /// Bytes the operation required.
        needed: usize,
        /// Buffer length at the time of the check.
        len: usize,
    },
    /// Object deserialization hit text that is not valid JSON.
    #[error("malformed JSON document: {0}")]
    MalformedData(#[source] serde_json::Error),
    /// A value could not be encoded to JSON.
    #[error("unserializable value: {0}")]
    Serialization(#[source] serde_json::Error),
    /// A length-prefixed string payload does not fit its 16-bit header.
    #[error("string of {len} bytes exceeds the {max}-byte length header", max = u16::MAX)]
    StringTooLong {
        /// UTF-8 byte length of the rejected string.
        len: usize,
    },
}
