//! Structural decoding of the `.knode` container.
//!
//! The decoder is a fixed pipeline of sub-parsers sharing one cursor:
//!
//! 1. Header — magic literal and version ([`node`]).
//! 2. Roots — the two packed root positions and the output root's
//!    connection list ([`node`], bit-unpacking arithmetic in `bits`).
//! 3. Tables — the node-path and value-type string tables ([`node`]).
//! 4. Instances — the placed nodes with their sockets ([`instance`],
//!    [`socket`]).
//!
//! Control flow is strictly sequential and single-pass: each sub-parser
//! consumes exactly the bytes it is responsible for and never backtracks.
//!
//! # Key Types
//!
//! - [`node::Node`] - The decoded document and the decode entry points.
//! - [`instance::Instance`] - One placed node.
//! - [`socket::Socket`] - One terminal on an instance.
//! - [`builtins::BuiltinNodeKind`] / [`builtins::BuiltinValueKind`] - The
//!   reserved enumerations selected by high type-index bytes.
//! - [`position::Position`] - A bias-corrected 2D coordinate.

pub(crate) mod bits;
pub mod builtins;
pub mod instance;
pub mod node;
pub mod position;
pub mod socket;
