//! Node instances: the placed nodes within a document.

use crate::{
    file::parser::Parser,
    format::{
        bits,
        builtins::NodeTypeRef,
        position::Position,
        socket::Socket,
    },
    Result,
};

/// An instance of a node prototype inside or outside the project.
///
/// On disk: key byte, type byte, a 4-byte packed header window (position,
/// name length, socket count), the name, then the sockets in file order.
/// The position of an instance in [`crate::Node::instances`] equals its
/// position in the file; that file order is the implicit index other
/// sockets use when referencing a connected node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    /// Document-local identifier. Not guaranteed unique by the decoder.
    pub key: u8,
    /// Raw type byte; resolve with [`Instance::node_type_ref`].
    pub node_type: u8,
    /// The name of this instance (at most 63 bytes).
    pub name: String,
    /// Where this instance is placed.
    pub position: Position,
    /// The sockets going into or out of this instance (at most 63).
    pub sockets: Vec<Socket>,
}

impl Instance {
    /// Resolve the raw type byte into a node-path table index or a built-in
    /// node kind.
    ///
    /// A [`NodeTypeRef::Path`] index is not checked against the document's
    /// node-path table; out-of-range indices are a consumer concern.
    #[must_use]
    pub fn node_type_ref(&self) -> NodeTypeRef {
        NodeTypeRef::from_raw(self.node_type)
    }

    /// Decode the instance at position `index` in the file.
    pub(crate) fn read(parser: &mut Parser<'_>, index: usize) -> Result<Instance> {
        parser.set_context(format!("parsing instance [{index}]"));

        let key = parser.read_be::<u8>()?;
        let node_type = parser.read_be::<u8>()?;

        let window: [u8; 4] = parser.read_array()?;
        let header = bits::instance_header(&window);

        let name_offset = parser.pos();
        let name_bytes = parser.read_bytes(usize::from(header.name_len))?;
        let name = String::from_utf8(name_bytes.to_vec()).map_err(|e| {
            parser.malformed_at(
                name_offset,
                format!("instance name is not valid UTF-8: {}", e.utf8_error()),
            )
        })?;

        let mut sockets = Vec::with_capacity(usize::from(header.socket_count));
        for si in 0..header.socket_count {
            parser.set_context(format!("parsing socket [{si}] in instance [{index}]"));
            sockets.push(Socket::read(parser)?);
        }

        Ok(Instance {
            key,
            node_type,
            name,
            position: header.position,
            sockets,
        })
    }
}
