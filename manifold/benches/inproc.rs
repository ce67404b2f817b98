//! Inproc data-path benchmarks: round-trip latency and one-way throughput.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use manifold::{Domain, Protocol, Socket};

fn round_trip(c: &mut Criterion) {
    let a = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    a.bind("inproc://bench-round-trip").unwrap();
    let b = Socket::new(Domain::Standard, Protocol::Pair).unwrap();
    b.connect("inproc://bench-round-trip").unwrap();

    let payload = [0x6f_u8; 64];
    c.bench_function("inproc_round_trip_64b", |bench| {
        bench.iter(|| {
            a.send(&payload).unwrap();
            let msg = b.recv().unwrap();
            b.send(&msg).unwrap();
            a.recv().unwrap()
        });
    });
}

fn one_way_throughput(c: &mut Criterion) {
    let push = Socket::new(Domain::Standard, Protocol::Push).unwrap();
    push.bind("inproc://bench-throughput").unwrap();
    let pull = Socket::new(Domain::Standard, Protocol::Pull).unwrap();
    pull.connect("inproc://bench-throughput").unwrap();

    let payload = vec![0x6f_u8; 10_240];
    let mut group = c.benchmark_group("inproc_one_way");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("10240b", |bench| {
        bench.iter(|| {
            push.send(&payload).unwrap();
            pull.recv().unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, round_trip, one_way_throughput);
criterion_main!(benches);
