//! Criterion benchmarks for the typed and dynamic codecs.
//!
//! Run with: cargo bench -p obi-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use obi_core::codec::{decode, encode};
use obi_core::impl_obi_record;
use obi_core::shape::Shape;
use obi_core::value::{decode_value, encode_value};
use obi_core::DecodeOptions;

#[derive(Debug, Default, PartialEq)]
struct Inner {
    a: i8,
    b: i8,
}
impl_obi_record!(Inner { a: i8, b: i8 });

#[derive(Debug, Default, PartialEq)]
struct ExampleData {
    symbol: String,
    px: u64,
    inner: Inner,
    arr: Vec<i16>,
}
impl_obi_record!(ExampleData { symbol: String, px: u64, inner: Inner, arr: Vec<i16> });

const EXAMPLE_SCHEMA: &str = "{symbol:string,px:u64,inner:{a:i8,b:i8},arr:[i16]}";

fn sample(n: usize) -> ExampleData {
    ExampleData {
        symbol: "BTC".into(),
        px: 9000,
        inner: Inner { a: 1, b: 2 },
        arr: (0..n as i16).collect(),
    }
}

fn bench_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed");

    for n in [2usize, 256, 4096] {
        let data = sample(n);
        let bytes = encode(&data).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_function(format!("encode_{}", n), |b| {
            b.iter(|| encode(black_box(&data)).unwrap());
        });
        group.bench_function(format!("decode_{}", n), |b| {
            b.iter(|| decode::<ExampleData>(black_box(&bytes)).unwrap());
        });
    }

    group.finish();
}

fn bench_dynamic(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");
    let shape = Shape::parse(EXAMPLE_SCHEMA).unwrap();
    let opts = DecodeOptions::default();

    for n in [2usize, 256, 4096] {
        let bytes = encode(&sample(n)).unwrap();
        let value = decode_value(&bytes, &shape, &opts).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_function(format!("decode_{}", n), |b| {
            b.iter(|| decode_value(black_box(&bytes), &shape, &opts).unwrap());
        });
        group.bench_function(format!("encode_{}", n), |b| {
            b.iter(|| encode_value(black_box(&value), &shape).unwrap());
        });
    }

    group.bench_function("parse_schema", |b| {
        b.iter(|| Shape::parse(black_box(EXAMPLE_SCHEMA)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_typed, bench_dynamic);
criterion_main!(benches);
