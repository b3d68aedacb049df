//! Serialization of a decoded node to JSON or a human-readable dump.
//!
//! The library keeps serde out of its types; this module mirrors the
//! document tree into serde-friendly structs and renders either form.

use knode::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
pub struct NodeDump {
    version: u8,
    input_root: PositionDump,
    output_root: OutputRootDump,
    nodes: Vec<String>,
    types: Vec<String>,
    instances: Vec<InstanceDump>,
}

#[derive(Serialize)]
struct PositionDump {
    x: i16,
    y: i16,
}

#[derive(Serialize)]
struct OutputRootDump {
    position: PositionDump,
    connections: Vec<[u8; 2]>,
}

#[derive(Serialize)]
struct InstanceDump {
    key: u8,
    #[serde(rename = "type")]
    node_type: String,
    name: String,
    position: PositionDump,
    sockets: Vec<SocketDump>,
}

#[derive(Serialize)]
struct SocketDump {
    kind: &'static str,
    value_type: String,
    port_slot: u8,
    repetitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection: Option<[u8; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl From<&Position> for PositionDump {
    fn from(position: &Position) -> Self {
        PositionDump {
            x: position.x,
            y: position.y,
        }
    }
}

impl From<&Node> for NodeDump {
    fn from(node: &Node) -> Self {
        NodeDump {
            version: node.version,
            input_root: (&node.input_root).into(),
            output_root: OutputRootDump {
                position: (&node.output_root.position).into(),
                connections: node
                    .output_root
                    .connections
                    .iter()
                    .map(|c| [c.instance, c.socket])
                    .collect(),
            },
            nodes: node.node_paths.clone(),
            types: node.value_types.clone(),
            instances: node.instances.iter().map(instance_dump).collect(),
        }
    }
}

fn instance_dump(instance: &Instance) -> InstanceDump {
    InstanceDump {
        key: instance.key,
        node_type: match instance.node_type_ref() {
            NodeTypeRef::Path(index) => format!("nodes[{index}]"),
            NodeTypeRef::Builtin(kind) => kind.name().to_string(),
        },
        name: instance.name.clone(),
        position: (&instance.position).into(),
        sockets: instance.sockets.iter().map(socket_dump).collect(),
    }
}

fn socket_dump(socket: &Socket) -> SocketDump {
    let (connection, value) = match &socket.payload {
        SocketPayload::None => (None, None),
        SocketPayload::Connection { instance, socket } => (Some([*instance, *socket]), None),
        SocketPayload::Value(value) => (None, Some(value.clone())),
    };
    SocketDump {
        kind: socket.kind.name(),
        value_type: match socket.value_type_ref() {
            ValueTypeRef::Table(index) => format!("types[{index}]"),
            ValueTypeRef::Builtin(kind) => kind.name().to_string(),
        },
        port_slot: socket.port_slot,
        repetitive: socket.repetitive,
        connection,
        value,
    }
}

/// Print the dump as pretty JSON (if `json`) or as an indented text tree.
pub fn print_node(node: &Node, json: bool) -> anyhow::Result<()> {
    let dump = NodeDump::from(node);
    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print_text(&dump);
    }
    Ok(())
}

fn print_text(dump: &NodeDump) {
    println!("version: {}", dump.version);
    println!("input root: ({}, {})", dump.input_root.x, dump.input_root.y);
    println!(
        "output root: ({}, {})",
        dump.output_root.position.x, dump.output_root.position.y
    );
    for [instance, socket] in &dump.output_root.connections {
        println!("  connection: instance {instance} socket {socket}");
    }

    println!("nodes: {}", dump.nodes.len());
    for (index, path) in dump.nodes.iter().enumerate() {
        println!("  [{index}] {path}");
    }
    println!("types: {}", dump.types.len());
    for (index, name) in dump.types.iter().enumerate() {
        println!("  [{index}] {name}");
    }

    println!("instances: {}", dump.instances.len());
    for instance in &dump.instances {
        println!(
            "  {:?} (key {}, {}) at ({}, {})",
            instance.name,
            instance.key,
            instance.node_type,
            instance.position.x,
            instance.position.y
        );
        for socket in &instance.sockets {
            let mut line = format!(
                "    {} slot {} type {}",
                socket.kind, socket.port_slot, socket.value_type
            );
            if socket.repetitive {
                line.push_str(" repetitive");
            }
            if let Some([instance, socket]) = socket.connection {
                line.push_str(&format!(" -> instance {instance} socket {socket}"));
            }
            if let Some(value) = &socket.value {
                line.push_str(&format!(" = {value:?}"));
            }
            println!("{line}");
        }
    }
}
