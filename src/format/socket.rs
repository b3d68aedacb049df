//! Sockets: the input/output terminals on a node instance.
//!
//! On disk a socket starts with a single flags byte:
//!
//! ```text
//! bit 0 (LSB)  switch value     inline value of an unconnected switch socket
//! bit 1        connected        a connection reference follows
//! bit 2        repetitive       socket may appear multiple times
//! bits 3-5     kind             see [`SocketKind`]
//! bits 6-7     padding          ignored
//! ```
//!
//! followed by a value-type byte and a port-slot byte. What follows depends
//! on the kind and the connected bit; see [`Socket::read`].

use bitflags::bitflags;
use strum::{FromRepr, IntoStaticStr};

use crate::{file::parser::Parser, format::builtins::ValueTypeRef, Result};

/// Bitmask extracting the kind field from a socket's flags byte.
pub const SOCKET_KIND_MASK: u8 = 0b0011_1000;
/// Right shift aligning the kind field after masking.
pub const SOCKET_KIND_SHIFT: u8 = 3;

bitflags! {
    /// The low three bits of a socket's flags byte.
    ///
    /// The kind field (bits 3-5) is not part of this set; it is extracted
    /// with [`SOCKET_KIND_MASK`] and mapped onto [`SocketKind`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SocketFlags: u8 {
        /// Inline boolean value of an unconnected switch socket.
        const SWITCH_VALUE = 0b0000_0001;
        /// The socket is connected to another socket.
        const CONNECTED = 0b0000_0010;
        /// The socket may show multiple times in the node. Useful for array
        /// inputs. Invalid (never set meaningfully) for switch sockets.
        const REPETITIVE = 0b0000_0100;
    }
}

/// Direction and kind of a socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr)]
#[repr(u8)]
pub enum SocketKind {
    /// An output declaration; carries neither connection nor value.
    #[strum(serialize = "outgoing named")]
    OutgoingNamed = 0,
    /// A named input.
    #[strum(serialize = "incoming named")]
    IncomingNamed = 1,
    /// A numeric input.
    #[strum(serialize = "incoming number")]
    IncomingNumber = 2,
    /// A selection input.
    #[strum(serialize = "incoming select")]
    IncomingSelect = 3,
    /// A boolean switch input.
    #[strum(serialize = "incoming switch")]
    IncomingSwitch = 4,
    /// A text input.
    #[strum(serialize = "incoming text")]
    IncomingText = 5,
}

impl SocketKind {
    /// Human-readable name, e.g. `"incoming switch"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// What an incoming socket carries: a connection reference or an inline
/// value, never both.
///
/// [`SocketPayload::None`] is the payload of every outgoing socket — they
/// are pure declarations referenced by other sockets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketPayload {
    /// No connection and no value (outgoing sockets only).
    None,
    /// A reference to a socket on another instance.
    Connection {
        /// Key of the instance the referenced socket is placed in.
        instance: u8,
        /// Index of the referenced socket within that instance.
        socket: u8,
    },
    /// An inline text value. For unconnected switch sockets this is the
    /// textual form of the switch bit, `"true"` or `"false"`.
    Value(String),
}

/// One input or output terminal on a node instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Socket {
    /// Direction and kind of this socket.
    pub kind: SocketKind,
    /// Raw index of the type this socket outputs; resolve with
    /// [`Socket::value_type_ref`].
    pub value_type: u8,
    /// Where this socket is placed outside of the node.
    pub port_slot: u8,
    /// Whether the socket may show multiple times in the node.
    pub repetitive: bool,
    /// Connection reference or inline value.
    pub payload: SocketPayload,
}

impl Socket {
    /// Resolve the raw value-type byte against the reserved built-in range.
    ///
    /// A [`ValueTypeRef::Table`] index is not checked against the document's
    /// value-type table; out-of-range indices are a consumer concern.
    #[must_use]
    pub fn value_type_ref(&self) -> ValueTypeRef {
        ValueTypeRef::from_raw(self.value_type)
    }

    /// Whether this socket carries a connection reference.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.payload, SocketPayload::Connection { .. })
    }

    /// Decode one socket at the cursor. The caller has already set the
    /// phase context (`"parsing socket [s] in instance [i]"`).
    pub(crate) fn read(parser: &mut Parser<'_>) -> Result<Socket> {
        let flags_offset = parser.pos();
        let raw_flags = parser.read_be::<u8>()?;
        let flags = SocketFlags::from_bits_truncate(raw_flags);

        let raw_kind = (raw_flags & SOCKET_KIND_MASK) >> SOCKET_KIND_SHIFT;
        let Some(kind) = SocketKind::from_repr(raw_kind) else {
            return Err(parser.malformed_at(
                flags_offset,
                format!("unknown socket kind {raw_kind}"),
            ));
        };

        let value_type = parser.read_be::<u8>()?;
        let port_slot = parser.read_be::<u8>()?;

        let payload = if kind == SocketKind::OutgoingNamed {
            // Outgoing sockets are declarations only; the connected and
            // switch bits carry no meaning for them.
            SocketPayload::None
        } else if flags.contains(SocketFlags::CONNECTED) {
            let instance = parser.read_be::<u8>()?;
            let socket = parser.read_be::<u8>()?;
            SocketPayload::Connection { instance, socket }
        } else if kind != SocketKind::IncomingSwitch {
            let length = parser.read_be::<u32>()? as usize;
            let value_offset = parser.pos();
            let bytes = parser.read_bytes(length)?;
            let value = String::from_utf8(bytes.to_vec()).map_err(|e| {
                parser.malformed_at(
                    value_offset,
                    format!("socket value is not valid UTF-8: {}", e.utf8_error()),
                )
            })?;
            SocketPayload::Value(value)
        } else {
            let value = flags.contains(SocketFlags::SWITCH_VALUE);
            SocketPayload::Value(value.to_string())
        };

        Ok(Socket {
            kind,
            value_type,
            port_slot,
            repetitive: flags.contains(SocketFlags::REPETITIVE),
            payload,
        })
    }
}
