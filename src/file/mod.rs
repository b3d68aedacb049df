//! Byte-level access to `.knode` input buffers.
//!
//! This module is the lowest layer of the decoder. It is built around the
//! [`crate::file::parser::Parser`] cursor, which owns a byte slice and a read
//! offset, hands out fixed-size big-endian scalars and raw slices, and turns
//! every shortfall into an [`crate::Error::OutOfData`] carrying the phase
//! label and the exact offset at which the shortfall was detected.
//!
//! # Key Components
//!
//! - [`crate::file::parser::Parser`] - The cursor; one per decode call, never
//!   shared.
//! - [`crate::file::io::FieldIO`] - The endian seam mapping `u8`/`u16`/`u32`
//!   to their fixed-size big-endian byte representations.
//!
//! # Thread Safety
//!
//! Neither type holds shared state; a [`Parser`] borrows its input buffer and
//! is confined to the decode call that created it. Concurrent decodes on
//! independent buffers are independent by construction.

pub mod io;
pub mod parser;

pub use parser::Parser;
