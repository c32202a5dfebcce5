//! The cursor-addressed byte buffer.

use serde::Serialize;

use crate::{CursorError, Endian, Result};

/// A growable contiguous byte buffer addressed through a cursor.
///
/// Every read and write happens at [`position`](Self::position) and
/// advances it. Writes enlarge the buffer as needed; reads past the end
/// fail with [`CursorError::OutOfBounds`]. Multi-byte numeric fields are
/// coded under [`endian`](Self::endian), little-endian by default.
///
/// # Example
///
/// ```
/// use bytecursor::{ByteCursor, Endian};
///
/// let mut buf = ByteCursor::new();
/// buf.endian = Endian::Big;
/// buf.write_u32(0xDEAD_BEEF);
/// assert_eq!(buf.as_slice(), [0xDE, 0xAD, 0xBE, 0xEF]);
///
/// buf.position = 0;
/// assert_eq!(buf.read_u32().unwrap(), 0xDEAD_BEEF);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCursor {
    data: Vec<u8>,
    /// Next byte offset at which a read or write occurs.
    pub position: usize,
    /// Byte order for multi-byte numeric fields.
    pub endian: Endian,
}

impl ByteCursor {
    /// Creates an empty buffer: zero length, cursor at 0, little-endian.
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------- sizing

    /// Resizes the storage to exactly `new_len` bytes.
    ///
    /// Growth zero-fills the new tail and preserves the cursor. Shrinking
    /// truncates and resets the cursor to 0: a cursor inside the removed
    /// tail would be meaningless, so it is reset rather than clamped.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.data.len();
        if new_len == len {
            return;
        }
        if new_len < len {
            self.position = 0;
        }
        self.data.resize(new_len, 0);
    }

    /// Replaces the storage wholesale.
    ///
    /// The cursor is left where it was; loaders that deliver fresh content
    /// reset it explicitly before calling this. Until they do, a stale
    /// cursor past the new end simply fails the next bounded operation.
    pub fn assign(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// The bounds gate shared by every read and write path.
    ///
    /// Succeeds silently when `len` bytes fit at the cursor. Otherwise,
    /// with `grow` set the buffer is resized to `position + len` (writes);
    /// without it the call fails with [`CursorError::OutOfBounds`] (reads).
    pub fn ensure_capacity(&mut self, len: usize, grow: bool) -> Result<()> {
        if self.position + len <= self.data.len() {
            return Ok(());
        }
        if !grow {
            return Err(CursorError::OutOfBounds {
                position: self.position,
                needed: len,
                len: self.data.len(),
            });
        }
        self.resize(self.position + len);
        Ok(())
    }

    /// Write-side half of [`ensure_capacity`](Self::ensure_capacity):
    /// grows the storage so `len` bytes fit at the cursor.
    fn grow(&mut self, len: usize) {
        let end = self.position + len;
        if end > self.data.len() {
            self.resize(end);
        }
    }

    // ---------------------------------------------------------------- accessors

    /// Bytes remaining between the cursor and the end of the buffer.
    pub fn bytes_available(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Current buffer length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sugar for [`resize`](Self::resize).
    pub fn set_len(&mut self, new_len: usize) {
        self.resize(new_len);
    }

    /// Immutable view of the full contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    // ---------------------------------------------------------------- reads

    #[inline]
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure_capacity(N, false)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.data[self.position..self.position + N]);
        self.position += N;
        Ok(bytes)
    }

    /// Reads one byte as a boolean: true iff the byte equals 1.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take::<1>()?[0] == 1)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take::<1>()?[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take::<1>()?[0] as i8)
    }

    /// Reads an unsigned 16-bit integer under the current endianness.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(self.take()?),
            Endian::Big => u16::from_be_bytes(self.take()?),
        })
    }

    /// Reads a signed 16-bit integer under the current endianness.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(match self.endian {
            Endian::Little => i16::from_le_bytes(self.take()?),
            Endian::Big => i16::from_be_bytes(self.take()?),
        })
    }

    /// Reads an unsigned 32-bit integer under the current endianness.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes(self.take()?),
            Endian::Big => u32::from_be_bytes(self.take()?),
        })
    }

    /// Reads a signed 32-bit integer under the current endianness.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(match self.endian {
            Endian::Little => i32::from_le_bytes(self.take()?),
            Endian::Big => i32::from_be_bytes(self.take()?),
        })
    }

    /// Reads an IEEE-754 single under the current endianness.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(match self.endian {
            Endian::Little => f32::from_le_bytes(self.take()?),
            Endian::Big => f32::from_be_bytes(self.take()?),
        })
    }

    /// Reads an IEEE-754 double under the current endianness.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(match self.endian {
            Endian::Little => f64::from_le_bytes(self.take()?),
            Endian::Big => f64::from_be_bytes(self.take()?),
        })
    }

    // ---------------------------------------------------------------- writes

    #[inline]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.grow(N);
        self.data[self.position..self.position + N].copy_from_slice(&bytes);
        self.position += N;
    }

    #[inline]
    fn put_slice(&mut self, bytes: &[u8]) {
        self.grow(bytes.len());
        self.data[self.position..self.position + bytes.len()].copy_from_slice(bytes);
        self.position += bytes.len();
    }

    /// Writes a boolean as one byte: 1 for true, 0 for false.
    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.put([u8::from(value)]);
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.put([value]);
    }

    /// Writes a signed 8-bit integer.
    #[inline]
    pub fn write_i8(&mut self, value: i8) {
        self.put([value as u8]);
    }

    /// Writes an unsigned 16-bit integer under the current endianness.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    /// Writes a signed 16-bit integer under the current endianness.
    #[inline]
    pub fn write_i16(&mut self, value: i16) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    /// Writes an unsigned 32-bit integer under the current endianness.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    /// Writes a signed 32-bit integer under the current endianness.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    /// Writes an IEEE-754 single under the current endianness.
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    /// Writes an IEEE-754 double under the current endianness.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        match self.endian {
            Endian::Little => self.put(value.to_le_bytes()),
            Endian::Big => self.put(value.to_be_bytes()),
        }
    }

    // ---------------------------------------------------------------- bulk

    /// Reads `len` bytes as an independent copy, advancing the cursor.
    ///
    /// `None` reads everything from the cursor to the end. The returned
    /// vector never aliases the live storage, so the buffer may be resized
    /// or reused afterwards without invalidating it.
    pub fn read_buf(&mut self, len: Option<usize>) -> Result<Vec<u8>> {
        let len = len.unwrap_or_else(|| self.bytes_available());
        self.ensure_capacity(len, false)?;
        let out = self.data[self.position..self.position + len].to_vec();
        self.position += len;
        Ok(out)
    }

    /// Copies bytes from this buffer into `target` starting at `offset`.
    ///
    /// `None` length takes the remainder from this buffer's cursor. The
    /// target's cursor is moved to `offset` and its storage grown to fit;
    /// only this buffer's cursor advances past the copied bytes.
    pub fn read_into(
        &mut self,
        target: &mut ByteCursor,
        offset: usize,
        len: Option<usize>,
    ) -> Result<()> {
        let len = len.unwrap_or_else(|| self.bytes_available());
        self.ensure_capacity(len, false)?;
        target.position = offset;
        target.grow(len);
        target.data[offset..offset + len]
            .copy_from_slice(&self.data[self.position..self.position + len]);
        self.position += len;
        Ok(())
    }

    // ---------------------------------------------------------------- text

    /// Reads exactly `len` bytes as UTF-8 text.
    ///
    /// Invalid sequences decode as U+FFFD; the cursor advances by `len`
    /// either way. Text bytes are independent of the endianness flag.
    pub fn read_utf_bytes(&mut self, len: usize) -> Result<String> {
        let bytes = self.read_buf(Some(len))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Writes the UTF-8 bytes of `s` with no length header.
    pub fn write_utf_bytes(&mut self, s: &str) {
        self.put_slice(s.as_bytes());
    }

    /// Reads a length-prefixed string: a 16-bit unsigned length under the
    /// current endianness, then that many UTF-8 bytes.
    pub fn read_utf(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        self.read_utf_bytes(len)
    }

    /// Writes a length-prefixed string.
    ///
    /// The header counts UTF-8 bytes. A string encoding to more than
    /// [`u16::MAX`] bytes fails with [`CursorError::StringTooLong`] before
    /// anything is written, leaving buffer and cursor untouched.
    pub fn write_utf(&mut self, s: &str) -> Result<()> {
        let bytes = s.as_bytes();
        if bytes.len() > u16::MAX as usize {
            return Err(CursorError::StringTooLong { len: bytes.len() });
        }
        self.write_u16(bytes.len() as u16);
        self.put_slice(bytes);
        Ok(())
    }

    // ---------------------------------------------------------------- objects

    /// Reads a length-prefixed JSON document into a dynamic value.
    ///
    /// Fails with [`CursorError::MalformedData`] when the decoded text is
    /// not valid JSON.
    pub fn read_object(&mut self) -> Result<serde_json::Value> {
        let text = self.read_utf()?;
        serde_json::from_str(&text).map_err(CursorError::MalformedData)
    }

    /// JSON-encodes `value` and writes it as a length-prefixed string.
    ///
    /// Fails with [`CursorError::Serialization`] when `value` cannot be
    /// encoded, or [`CursorError::StringTooLong`] when the document does
    /// not fit the 16-bit length header.
    pub fn write_object<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let text = serde_json::to_string(value).map_err(CursorError::Serialization)?;
        self.write_utf(&text)
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data,
            position: 0,
            endian: Endian::default(),
        }
    }
}
