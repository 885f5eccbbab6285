use std::hint::black_box;

use codec::Snapshot;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("set_fields_and_serialize", |b| {
        b.iter(|| {
            let mut snapshot = Snapshot::new();
            snapshot.set_position(black_box(10), black_box(5), black_box(8));
            snapshot.set_velocity(black_box(-5));
            black_box(snapshot.serialize())
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = {
        let mut snapshot = Snapshot::new();
        snapshot.set_position(10, 5, 8);
        snapshot.set_velocity(-5);
        snapshot.serialize()
    };
    c.bench_function("deserialize_and_validate", |b| {
        b.iter(|| {
            let snapshot = Snapshot::deserialize(black_box(bytes));
            black_box((snapshot.is_valid(), snapshot.fields()))
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
