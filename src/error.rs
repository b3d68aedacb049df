use thiserror::Error;

/// The generic error type covering every failure this library can return.
///
/// # Error Categories
///
/// ## Structural errors
/// [`Error::Malformed`] and [`Error::OutOfData`] are produced while walking
/// the byte buffer. Both carry the decoding-phase label, a message, and the
/// byte offset the cursor stood at when the failure was detected, so the
/// rendered error reads e.g.
/// `error while parsing socket [2] in instance [5]: 3 more byte(s) needed (at offset 57 [0x39])`.
///
/// ## Transport errors
/// [`Error::Io`] wraps failures of the underlying input (stream could not be
/// read, file could not be opened or mapped). No cursor exists at that point,
/// so there is no phase/offset triple.
///
/// Callers must treat any error as "no usable document was produced" — the
/// decoder never returns a partial result.
///
/// # Examples
///
/// ```rust
/// use knode::{Error, Node};
///
/// match Node::from_slice(b"kronarknode\x02") {
///     Err(Error::Malformed { context, message, .. }) => {
///         assert_eq!(context, "reading version number");
///         assert!(message.contains("higher than latest"));
///     }
///     other => panic!("expected a malformed error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer does not conform to the `.knode` format.
    ///
    /// Covers bad magic, unsupported versions, invalid socket kinds, and
    /// text fields that are not valid UTF-8.
    #[error("error while {context}: {message} (at offset {offset} [{offset:#x}])")]
    Malformed {
        /// The decoding phase during which the failure was detected.
        context: String,
        /// Human-readable description of what was malformed.
        message: String,
        /// Byte offset the cursor stood at.
        offset: usize,
    },

    /// The buffer ended before a declared field could be read in full.
    #[error("error while {context}: {needed} more byte(s) needed (at offset {offset} [{offset:#x}])")]
    OutOfData {
        /// The decoding phase during which the shortfall was detected.
        context: String,
        /// How many bytes were missing.
        needed: usize,
        /// Byte offset the cursor stood at.
        offset: usize,
    },

    /// The underlying input could not be read.
    ///
    /// Only produced by the stream and file entry points, before any
    /// structural decoding begins.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The byte offset attached to a structural error, if any.
    ///
    /// Returns `None` for [`Error::Io`].
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Malformed { offset, .. } | Error::OutOfData { offset, .. } => Some(*offset),
            Error::Io(_) => None,
        }
    }

    /// The decoding-phase label attached to a structural error, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Error::Malformed { context, .. } | Error::OutOfData { context, .. } => Some(context),
            Error::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_display_carries_the_triple() {
        let error = Error::Malformed {
            context: "parsing magic".into(),
            message: "invalid magic".into(),
            offset: 0,
        };
        assert_eq!(
            error.to_string(),
            "error while parsing magic: invalid magic (at offset 0 [0x0])"
        );
        assert_eq!(error.offset(), Some(0));
        assert_eq!(error.context(), Some("parsing magic"));
    }

    #[test]
    fn out_of_data_display_carries_the_triple() {
        let error = Error::OutOfData {
            context: "reading version number".into(),
            needed: 1,
            offset: 11,
        };
        assert_eq!(
            error.to_string(),
            "error while reading version number: 1 more byte(s) needed (at offset 11 [0xb])"
        );
        assert_eq!(error.offset(), Some(11));
    }

    #[test]
    fn io_errors_have_no_offset() {
        let error = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(error.offset(), None);
        assert_eq!(error.context(), None);
    }
}
