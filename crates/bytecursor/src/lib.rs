//! Growable cursor-addressed byte buffer with selectable endianness.
//!
//! This crate provides [`ByteCursor`], a single contiguous byte region with
//! a read/write position tracked across calls. Typed reads and writes cover
//! the primitive numeric types, booleans, length-prefixed UTF-8 strings,
//! and JSON-encodable objects.
//!
//! # Overview
//!
//! - Writes grow the buffer to fit; reads never do.
//! - [`Endian`] selects the byte order of every multi-byte numeric field
//!   (little-endian by default); text bytes are never reordered.
//! - Reads hand back independent copies, never views that alias the live
//!   storage.
//!
//! # Example
//!
//! ```
//! use bytecursor::ByteCursor;
//!
//! let mut buf = ByteCursor::new();
//! buf.write_u16(0x0203);
//! buf.write_utf("hello").unwrap();
//!
//! buf.position = 0;
//! assert_eq!(buf.read_u16().unwrap(), 0x0203);
//! assert_eq!(buf.read_utf().unwrap(), "hello");
//! assert_eq!(buf.bytes_available(), 0);
//! ```

mod cursor;
mod endian;
mod error;

pub use cursor::ByteCursor;
pub use endian::Endian;
pub use error::CursorError;

/// Result type alias for cursor buffer operations.
pub type Result<T> = std::result::Result<T, CursorError>;
