// Copyright 2026 The knode contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # knode
//!
//! A parser for the Kronark node (`.knode`) binary container format.
//!
//! A `.knode` file is a serialized visual node-graph document: placed node
//! instances with 2D positions, the sockets on each instance, the connections
//! between them, and two string tables holding the node paths and value-type
//! names the document refers to. To keep files small, the format mixes
//! byte-aligned fields with sub-byte bit-packed fields (10-bit positions,
//! 6-bit lengths and counts), all in big-endian order.
//!
//! This crate implements the decoding side only — the format has no encoder.
//! Decoding is single-pass, sequential, and all-or-nothing: a successful call
//! yields a fully populated [`Node`], a failed call yields an error and no
//! partial document.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use knode::Node;
//!
//! let node = Node::from_file("project.knode")?;
//! println!("format version {}", node.version);
//! for instance in &node.instances {
//!     println!("{} at ({}, {})", instance.name, instance.position.x, instance.position.y);
//! }
//! # Ok::<(), knode::Error>(())
//! ```
//!
//! Decoding from an in-memory buffer or an arbitrary reader:
//!
//! ```rust
//! use knode::Node;
//!
//! let mut buf = b"kronarknode\x01".to_vec();
//! buf.extend_from_slice(&[0; 9]); // roots, connections, tables, instances
//! let node = Node::from_slice(&buf)?;
//! assert_eq!(node.version, 1);
//! # Ok::<(), knode::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`file`] — the byte-level layer: the [`Parser`] cursor that tracks the
//!   read offset and phase context, and the endian conversion seam.
//! - [`format`] — the structural layer: the document tree types and the
//!   sub-parsers for the header, roots, string tables, instances, and
//!   sockets, plus the pure bit-unpacking arithmetic.
//! - [`prelude`] — convenient re-exports of the commonly used types.
//!
//! ## Error Handling
//!
//! Every structural failure reports three facts: the phase that was being
//! parsed, a human-readable message, and the byte offset the cursor stood at.
//! I/O failures from [`Node::from_reader`] and [`Node::from_file`] are a
//! separate category ([`Error::Io`]) since no cursor exists yet.
//!
//! ```rust
//! use knode::{Error, Node};
//!
//! match Node::from_slice(b"notkronark!\x01") {
//!     Err(Error::Malformed { context, offset, .. }) => {
//!         assert_eq!(context, "parsing magic");
//!         assert_eq!(offset, 0);
//!     }
//!     other => panic!("expected a malformed error, got {other:?}"),
//! }
//! ```
//!
//! ## Concurrency
//!
//! The decoder holds no process-wide mutable state. Each call owns its own
//! cursor over its own buffer, so concurrent decodes of independent buffers
//! are safe and yield the same results as sequential decoding.

pub(crate) mod error;

/// Byte-level reading: the cursor over the input buffer and the big-endian
/// scalar conversion seam.
///
/// This module knows nothing of the `.knode` structure; it offers
/// bounds-checked sequential access over a byte slice and reports shortfalls
/// with the exact offset at which they were detected.
pub mod file;

/// Structural decoding of the `.knode` container.
///
/// The submodules mirror the sections of the file: the built-in enumerations
/// ([`format::builtins`](crate::format::builtins)), positions
/// ([`format::position`](crate::format::position)), sockets
/// ([`format::socket`](crate::format::socket)), instances
/// ([`format::instance`](crate::format::instance)), and the document root
/// with the decode entry points ([`format::node`](crate::format::node)).
pub mod format;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust,no_run
/// use knode::prelude::*;
///
/// let node = Node::from_file("project.knode")?;
/// # Ok::<(), knode::Error>(())
/// ```
pub mod prelude;

pub use error::Error;
pub use file::parser::Parser;
pub use format::node::Node;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
