use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde::{Deserialize, Serialize};
use serde_cton::{cton, decode, encode, from_str, to_string, Value};

#[derive(Serialize, Deserialize, Clone)]
struct Record {
    id: u64,
    name: String,
    active: bool,
    score: f64,
    tags: Vec<String>,
}

fn sample_records(n: u64) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            id: i,
            name: format!("record{i}"),
            active: i % 3 != 0,
            score: i as f64 * 0.5,
            tags: vec!["alpha".to_string(), format!("group{}", i % 7)],
        })
        .collect()
}

fn sample_tree() -> Value {
    cton!({
        "users": [
            {"id": 1, "name": "Alice", "roles": ["admin", "user"]},
            {"id": 2, "name": "Bob", "roles": ["user"]},
            {"id": 3, "name": "Carol", "roles": []}
        ],
        "counts": {"total": 3, "active": 2},
        "note": "synthetic workload for throughput comparison"
    })
}

fn bench_encode(c: &mut Criterion) {
    let tree = sample_tree();
    c.bench_function("encode_value_tree", |b| {
        b.iter(|| encode(black_box(&tree)).unwrap())
    });

    let records = sample_records(100);
    c.bench_function("encode_typed_100_records", |b| {
        b.iter(|| to_string(black_box(&records)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let text = encode(&sample_tree()).unwrap();
    c.bench_function("decode_value_tree", |b| b.iter(|| decode(black_box(&text))));

    let text = to_string(&sample_records(100)).unwrap();
    c.bench_function("decode_typed_100_records", |b| {
        b.iter(|| from_str::<Vec<Record>>(black_box(&text)).unwrap())
    });
}

fn bench_vs_json(c: &mut Criterion) {
    let records = sample_records(100);

    let mut group = c.benchmark_group("serialize_100_records");
    group.bench_function("cton", |b| {
        b.iter(|| to_string(black_box(&records)).unwrap())
    });
    group.bench_function("json", |b| {
        b.iter(|| serde_json::to_string(black_box(&records)).unwrap())
    });
    group.finish();

    let cton_text = to_string(&records).unwrap();
    let json_text = serde_json::to_string(&records).unwrap();

    let mut group = c.benchmark_group("deserialize_100_records");
    group.bench_function("cton", |b| {
        b.iter(|| from_str::<Vec<Record>>(black_box(&cton_text)).unwrap())
    });
    group.bench_function("json", |b| {
        b.iter(|| serde_json::from_str::<Vec<Record>>(black_box(&json_text)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_vs_json);
criterion_main!(benches);
