//! Byte order selector for multi-byte numeric fields.

/// Byte order applied to every multi-byte numeric read and write.
///
/// Endianness never affects encoded text bytes, only numeric fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first. The default.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}
