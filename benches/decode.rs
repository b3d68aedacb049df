use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use knode::Node;

/// Builds a synthetic document with `instances` instances of three sockets
/// each: one outgoing, one connected, one carrying an inline value.
fn synthetic_document(instances: u8) -> Vec<u8> {
    let mut buf = knode::format::node::MAGIC.to_vec();
    buf.push(1); // version
    buf.extend_from_slice(&[125, 31, 71, 209, 244]); // root window, positions (0, 0)
    buf.push(0); // no connections
    buf.push(1); // one node path
    buf.extend_from_slice(&[7, b'a', b'.', b'k', b'n', b'o', b'd', b'e']);
    buf.push(1); // one value type
    buf.extend_from_slice(&[4, b't', b'e', b'x', b't']);
    buf.push(instances);
    for key in 0..instances {
        buf.push(key);
        buf.push(0); // node path 0
        buf.extend_from_slice(&[125, 31, 64 | 1, 3]); // name length 4, 3 sockets
        buf.extend_from_slice(b"inst");
        // outgoing named
        buf.extend_from_slice(&[0, 0xF5, 0]);
        // incoming named, connected
        buf.extend_from_slice(&[1 << 3 | 0b10, 0, 1, 0, 0]);
        // incoming text with inline value
        buf.extend_from_slice(&[5 << 3, 0, 2]);
        buf.extend_from_slice(&5u32.to_be_bytes());
        buf.extend_from_slice(b"value");
    }
    buf
}

fn bench_decode(c: &mut Criterion) {
    let buf = synthetic_document(200);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("from_slice_200_instances", |b| {
        b.iter(|| Node::from_slice(&buf).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
