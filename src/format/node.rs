//! The document tree and the decode entry points.
//!
//! A `.knode` file is decoded in five fixed phases against one shared cursor:
//! header (magic + version), roots (packed positions + output connections),
//! the two string tables (node paths, value types), then the instances. The
//! first failing phase aborts the decode; no partial [`Node`] is ever
//! returned.
//!
//! # File Layout
//!
//! ```text
//! "kronarknode"            11-byte ASCII magic
//! version                  1 byte, must be <= 1
//! root window              5 bytes, four packed 10-bit coordinates
//! connection count N       1 byte
//! N x (instance, socket)   2 bytes each
//! node path table          count byte, then length-prefixed entries
//! value type table         count byte, then length-prefixed entries
//! instance count           1 byte
//! instances                see [`crate::format::instance::Instance`]
//! ```

use std::{fs, io::Read, path::Path};

use memmap2::Mmap;

use crate::{
    file::parser::Parser,
    format::{bits, instance::Instance, position::Position},
    Result,
};

/// The magic number of a `.knode` file.
pub const MAGIC: &[u8; 11] = b"kronarknode";

/// The latest version of the Kronark node format.
pub const LATEST_VERSION: u8 = 1;

/// A (instance-index, socket-index) pair in the output root's connection
/// list.
///
/// The indices are stored verbatim; the decoder does not verify that they
/// refer to an instance or socket actually present in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Index of the referenced instance, in file order.
    pub instance: u8,
    /// Index of the referenced socket within that instance.
    pub socket: u8,
}

/// The node's output root: a position plus the ordered connection list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputRoot {
    /// Where the output root is placed. Invalid for root nodes.
    pub position: Position,
    /// Connections into the output root, in file order.
    pub connections: Vec<Connection>,
}

/// The structure of a node file: the fully decoded document.
///
/// A `Node` owns all of its children exclusively and is immutable after a
/// successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// The format version of this node.
    pub version: u8,
    /// The position of the node's input root. Invalid for root nodes.
    pub input_root: Position,
    /// The node's output root. Invalid for root nodes.
    pub output_root: OutputRoot,
    /// The paths to all nodes this node refers to, in file order.
    pub node_paths: Vec<String>,
    /// The non-reserved value types this node uses, in file order.
    pub value_types: Vec<String>,
    /// The node instances this node contains, in file order.
    pub instances: Vec<Instance>,
}

/// Alias for [`Node`]. Helpful for showcasing intent.
pub type Space = Node;
/// Alias for [`Node`]. Helpful for showcasing intent.
pub type NodeSpace = Node;
/// Alias for [`Node`]. Helpful for showcasing intent.
pub type RootNode = Node;
/// Alias for [`Node`]. Helpful for showcasing intent.
pub type RootSpace = Node;

impl Node {
    /// Decode a node from an in-memory buffer.
    ///
    /// This is the core primitive; the other entry points delegate to it.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] or [`crate::Error::OutOfData`]
    /// when the buffer does not hold a well-formed document. No partial
    /// result is produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use knode::Node;
    ///
    /// let mut buf = b"kronarknode\x01".to_vec();
    /// buf.extend_from_slice(&[0; 9]);
    /// let node = Node::from_slice(&buf)?;
    /// assert!(node.instances.is_empty());
    /// # Ok::<(), knode::Error>(())
    /// ```
    pub fn from_slice(data: &[u8]) -> Result<Node> {
        let mut parser = Parser::new(data);

        let version = read_header(&mut parser)?;
        let (input_root, output_root) = read_roots(&mut parser)?;
        let node_paths = read_table(&mut parser, "nodes")?;
        let value_types = read_table(&mut parser, "types")?;
        let instances = read_instances(&mut parser)?;

        Ok(Node {
            version,
            input_root,
            output_root,
            node_paths,
            value_types,
            instances,
        })
    }

    /// Decode a node from a reader, reading it to completion first.
    ///
    /// # Errors
    /// Read failures of the underlying stream surface as
    /// [`crate::Error::Io`]; structural failures are reported exactly as by
    /// [`Node::from_slice`].
    pub fn from_reader(mut reader: impl Read) -> Result<Node> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Node::from_slice(&buf)
    }

    /// Decode a node from a file on disk, using a read-only memory mapping.
    ///
    /// # Errors
    /// Returns [`crate::Error::Io`] if the file cannot be opened or mapped,
    /// otherwise reports as [`Node::from_slice`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use knode::Node;
    ///
    /// let node = Node::from_file("project.knode")?;
    /// println!("{} instances", node.instances.len());
    /// # Ok::<(), knode::Error>(())
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Node> {
        let file = fs::File::open(path)?;
        // Mapping is read-only; the decoder never writes through it.
        let mmap = unsafe { Mmap::map(&file)? };
        Node::from_slice(&mmap)
    }
}

fn read_header(parser: &mut Parser<'_>) -> Result<u8> {
    parser.set_context("parsing magic");
    let magic_offset = parser.pos();
    let magic = parser.read_bytes(MAGIC.len())?;
    if magic != MAGIC {
        return Err(parser.malformed_at(magic_offset, format!("invalid magic {magic:?}")));
    }

    parser.set_context("reading version number");
    let version_offset = parser.pos();
    let version = parser.read_be::<u8>()?;
    if version > LATEST_VERSION {
        return Err(parser.malformed_at(
            version_offset,
            format!("invalid version number {version} (higher than latest [{LATEST_VERSION}])"),
        ));
    }

    Ok(version)
}

fn read_roots(parser: &mut Parser<'_>) -> Result<(Position, OutputRoot)> {
    parser.set_context("unpacking root positions");
    let window: [u8; 5] = parser.read_array()?;
    let (input_root, output_position) = bits::root_positions(&window);

    parser.set_context("reading amount of connections");
    let connection_count = parser.read_be::<u8>()?;

    let mut connections = Vec::with_capacity(usize::from(connection_count));
    for i in 0..connection_count {
        parser.set_context(format!("reading outgoing connection [{i}]"));
        let instance = parser.read_be::<u8>()?;
        let socket = parser.read_be::<u8>()?;
        connections.push(Connection { instance, socket });
    }

    Ok((
        input_root,
        OutputRoot {
            position: output_position,
            connections,
        },
    ))
}

fn read_table(parser: &mut Parser<'_>, label: &str) -> Result<Vec<String>> {
    parser.set_context(format!("reading amount of {label}"));
    let count = parser.read_be::<u8>()?;

    let mut entries = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        let length = parser.read_be::<u8>()?;
        let entry_offset = parser.pos();
        let bytes = parser.read_bytes(usize::from(length))?;
        let entry = String::from_utf8(bytes.to_vec()).map_err(|e| {
            parser.malformed_at(
                entry_offset,
                format!("table entry is not valid UTF-8: {}", e.utf8_error()),
            )
        })?;
        entries.push(entry);
    }

    Ok(entries)
}

fn read_instances(parser: &mut Parser<'_>) -> Result<Vec<Instance>> {
    parser.set_context("reading amount of instances");
    let count = parser.read_be::<u8>()?;

    let mut instances = Vec::with_capacity(usize::from(count));
    for index in 0..count {
        instances.push(Instance::read(parser, usize::from(index))?);
    }

    Ok(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn header(version: u8) -> Vec<u8> {
        let mut buf = MAGIC.to_vec();
        buf.push(version);
        buf
    }

    #[test]
    fn magic_mismatch_fails_at_offset_zero() {
        let mut buf = b"kronarkNODE".to_vec();
        buf.push(1);
        let error = Node::from_slice(&buf).unwrap_err();
        match error {
            Error::Malformed {
                context,
                message,
                offset,
            } => {
                assert_eq!(context, "parsing magic");
                assert!(message.contains("invalid magic"));
                assert_eq!(offset, 0);
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn version_too_new_is_rejected() {
        let mut buf = header(LATEST_VERSION + 1);
        buf.extend_from_slice(&[0; 9]);
        let error = Node::from_slice(&buf).unwrap_err();
        assert_eq!(error.context(), Some("reading version number"));
    }

    #[test]
    fn version_zero_is_accepted() {
        let mut buf = header(0);
        buf.extend_from_slice(&[0; 9]);
        assert_eq!(Node::from_slice(&buf).unwrap().version, 0);
    }

    #[test]
    fn missing_version_byte_reports_phase() {
        let error = Node::from_slice(MAGIC).unwrap_err();
        match error {
            Error::OutOfData {
                context, offset, ..
            } => {
                assert_eq!(context, "reading version number");
                assert_eq!(offset, 11);
            }
            other => panic!("expected OutOfData, got {other:?}"),
        }
    }

    #[test]
    fn truncated_connection_list_reports_which_connection() {
        let mut buf = header(1);
        buf.extend_from_slice(&[0; 5]); // root window
        buf.push(2); // two connections declared
        buf.extend_from_slice(&[0, 1]); // only one present
        let error = Node::from_slice(&buf).unwrap_err();
        assert_eq!(error.context(), Some("reading outgoing connection [1]"));
    }

    #[test]
    fn tables_preserve_file_order() {
        let mut buf = header(1);
        buf.extend_from_slice(&[0; 5]);
        buf.push(0); // no connections
        buf.push(2); // two node paths
        buf.extend_from_slice(&[1, b'b']);
        buf.extend_from_slice(&[1, b'a']);
        buf.push(1); // one value type
        buf.extend_from_slice(&[4, b'c', b'h', b'a', b'r']);
        buf.push(0); // no instances

        let node = Node::from_slice(&buf).unwrap();
        assert_eq!(node.node_paths, vec!["b", "a"]);
        assert_eq!(node.value_types, vec!["char"]);
    }

    #[test]
    fn table_entry_invalid_utf8_is_malformed() {
        let mut buf = header(1);
        buf.extend_from_slice(&[0; 5]);
        buf.push(0);
        buf.push(1);
        buf.extend_from_slice(&[2, 0xFF, 0xFE]);
        let error = Node::from_slice(&buf).unwrap_err();
        match error {
            Error::Malformed {
                message, offset, ..
            } => {
                assert!(message.contains("not valid UTF-8"));
                assert_eq!(offset, 20);
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn trailing_bytes_after_instances_are_ignored() {
        let mut buf = header(1);
        buf.extend_from_slice(&[0; 9]);
        buf.extend_from_slice(&[0xAA, 0xBB]);
        assert!(Node::from_slice(&buf).is_ok());
    }
}
