//! Performance benchmarks for the LZEVIL codec.
//!
//! Measures compression and decompression throughput across data patterns
//! that exercise the matcher differently: uniform runs (maximum-length
//! matches), server-record-like text, the sparse mostly-zero corpus the
//! format was built for, and incompressible noise.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzevil_codec::{compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions.
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data, best case for the matcher.
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Repeating record-like text.
    pub fn record_like(size: usize) -> Vec<u8> {
        let record = b"\x02srv-eu-07\x00Twilight Vale\x0012/32\x00map_karn\x00";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            data.extend_from_slice(&record[..record.len().min(remaining)]);
        }
        data
    }

    /// Mostly zeros with sparse small values, the format's home turf.
    pub fn sparse(size: usize) -> Vec<u8> {
        let mut seed = 0i64;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
                let value = (((seed >> 16) & 0x7FFF) % 200) as u8;
                if value > 5 { 0 } else { value }
            })
            .collect()
    }

    /// Incompressible noise, worst case for the matcher.
    pub fn random(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect()
    }
}

fn patterns() -> [(&'static str, PatternGenerator); 4] {
    [
        ("uniform", test_data::uniform as PatternGenerator),
        ("records", test_data::record_like as PatternGenerator),
        ("sparse", test_data::sparse as PatternGenerator),
        ("random", test_data::random as PatternGenerator),
    ]
}

const SIZE: usize = 64 * 1024;

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (name, generator) in patterns() {
        let data = generator(SIZE);
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let packed = compress(black_box(data)).unwrap();
                black_box(packed);
            });
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for (name, generator) in patterns() {
        let data = generator(SIZE);
        let packed = compress(&data).unwrap();
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &packed, |b, packed| {
            b.iter(|| {
                let unpacked = decompress(black_box(packed)).unwrap();
                black_box(unpacked);
            });
        });
    }

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for (name, generator) in patterns() {
        let data = generator(SIZE);
        group.throughput(Throughput::Bytes(SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let packed = compress(black_box(data)).unwrap();
                let unpacked = decompress(&packed).unwrap();
                black_box(unpacked);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_roundtrip);
criterion_main!(benches);
