//! Cursor-based field reader for `.knode` buffers.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a
//! bounds-checked cursor over a byte slice. All reads are sequential and
//! relative to the buffer start; the offset only ever moves forward and never
//! past the end of the buffer.
//!
//! Besides the offset, the cursor carries the current decoding-phase label
//! (e.g. `"reading amount of instances"`). Every error it produces embeds
//! that label together with the offset, which is what gives the library its
//! error-reporting contract without threading context through each call site.
//!
//! # Usage
//!
//! ```rust
//! use knode::Parser;
//!
//! let data = [0x01, 0x02, 0x03, 0x04, 0x05];
//! let mut parser = Parser::new(&data);
//!
//! let first: u8 = parser.read_be()?;
//! assert_eq!(first, 0x01);
//!
//! let pair: u16 = parser.read_be()?;
//! assert_eq!(pair, 0x0203); // big-endian
//! assert_eq!(parser.pos(), 3);
//! # Ok::<(), knode::Error>(())
//! ```

use crate::{file::io::FieldIO, Error, Result};

/// A cursor over one input buffer.
///
/// `Parser` maintains a read offset and the current decoding-phase label.
/// All operations validate data availability before reading; a shortfall is
/// reported as [`Error::OutOfData`] with the offset at which it was detected,
/// never as a silent truncation.
///
/// A `Parser` is single-owner state: each decode call constructs its own and
/// drops it on completion, so concurrent decodes never interfere.
///
/// # Examples
///
/// ```rust
/// use knode::Parser;
///
/// let data = [b'h', b'i', 0x00, 0x2A];
/// let mut parser = Parser::new(&data);
///
/// let text = parser.read_bytes(2)?;
/// assert_eq!(text, b"hi");
///
/// let answer: u16 = parser.read_be()?;
/// assert_eq!(answer, 42);
/// assert_eq!(parser.remaining(), 0);
/// # Ok::<(), knode::Error>(())
/// ```
pub struct Parser<'a> {
    /// The buffer being decoded.
    data: &'a [u8],
    /// Current read offset within `data`.
    position: usize,
    /// Label of the decoding phase currently in progress.
    context: String,
}

impl<'a> Parser<'a> {
    /// Create a new [`Parser`] over `data`, positioned at offset 0.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser {
            data,
            position: 0,
            context: String::new(),
        }
    }

    /// Total length of the underlying buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current read offset.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Number of bytes remaining from the current offset.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Set the decoding-phase label embedded in subsequent errors.
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    /// The current decoding-phase label.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Read the next `length` bytes and advance the offset by `length`.
    ///
    /// # Errors
    /// Returns [`Error::OutOfData`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let end = match self.position.checked_add(length) {
            Some(end) if end <= self.data.len() => end,
            _ => return Err(self.out_of_data(length)),
        };

        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Read a fixed-size window of `N` bytes.
    ///
    /// Used for the bit-packed windows (4 bytes for instance headers, 5 bytes
    /// for root positions), which are unpacked by pure arithmetic elsewhere.
    ///
    /// # Errors
    /// Returns [`Error::OutOfData`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let Ok(window) = bytes.try_into() else {
            return Err(self.out_of_data(N));
        };
        Ok(window)
    }

    /// Read a big-endian unsigned scalar of type `T` (1, 2, or 4 bytes) and
    /// advance the offset by its width.
    ///
    /// # Errors
    /// Returns [`Error::OutOfData`] if reading `T` would exceed the buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use knode::Parser;
    ///
    /// let data = [0x00, 0x00, 0x01, 0x00];
    /// let mut parser = Parser::new(&data);
    /// let length: u32 = parser.read_be()?;
    /// assert_eq!(length, 256);
    /// # Ok::<(), knode::Error>(())
    /// ```
    pub fn read_be<T: FieldIO>(&mut self) -> Result<T> {
        let width = std::mem::size_of::<T>();
        let raw = self.read_bytes(width)?;
        let Ok(bytes) = raw.try_into() else {
            return Err(self.out_of_data(width));
        };
        Ok(T::from_be_bytes(bytes))
    }

    /// Build a [`Error::Malformed`] carrying the current context and offset.
    ///
    /// The cursor state is not modified; callers return the error themselves.
    #[must_use]
    pub fn malformed(&self, message: impl Into<String>) -> Error {
        self.malformed_at(self.position, message)
    }

    /// Build a [`Error::Malformed`] for a field that began at `offset`.
    ///
    /// Validation failures (bad magic, unsupported version) report the offset
    /// at which the offending field started rather than the offset after it
    /// was read.
    #[must_use]
    pub fn malformed_at(&self, offset: usize, message: impl Into<String>) -> Error {
        Error::Malformed {
            context: self.context.clone(),
            message: message.into(),
            offset,
        }
    }

    fn out_of_data(&self, requested: usize) -> Error {
        Error::OutOfData {
            context: self.context.clone(),
            needed: requested.saturating_sub(self.remaining()),
            offset: self.position,
        }
    }
}
