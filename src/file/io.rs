//! Endian conversion seam for fixed-size scalar fields.
//!
//! The `.knode` format stores every multi-byte scalar in big-endian order.
//! The [`FieldIO`] trait maps each supported scalar type to its fixed-size
//! byte-array representation so that [`crate::file::parser::Parser::read_be`]
//! can stay generic over the field width (1, 2, or 4 bytes).

/// Conversion between a scalar type and its fixed-size big-endian encoding.
///
/// Implemented for the unsigned widths the format actually uses: `u8` for
/// counts, keys, indices, and flags; `u16` for raw packed windows handled
/// elsewhere; `u32` for inline-value lengths.
///
/// # Thread Safety
///
/// All implementations are pure conversions over primitive types, with no
/// shared state.
pub trait FieldIO: Sized {
    /// The fixed-size byte array holding this type's encoding.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Decode `Self` from its big-endian byte representation.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

impl FieldIO for u8 {
    type Bytes = [u8; 1];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        bytes[0]
    }
}

impl FieldIO for u16 {
    type Bytes = [u8; 2];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u16::from_be_bytes(bytes)
    }
}

impl FieldIO for u32 {
    type Bytes = [u8; 4];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        u32::from_be_bytes(bytes)
    }
}
