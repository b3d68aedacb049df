//! Convenient re-exports of the most commonly used types and traits.

pub use crate::{
    format::{
        builtins::{BuiltinNodeKind, BuiltinValueKind, NodeTypeRef, ValueTypeRef},
        instance::Instance,
        node::{Connection, Node, OutputRoot, LATEST_VERSION, MAGIC},
        position::Position,
        socket::{Socket, SocketFlags, SocketKind, SocketPayload},
    },
    Error, Parser, Result,
};
