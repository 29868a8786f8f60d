//! Digest throughput across input sizes and storage kinds.
//!
//! # Groups
//!
//! 1. **Input size scaling** - borrowed slices, 0 B to 64 KiB
//! 2. **Storage kinds** - the same bytes as a slice, a shared buffer, and a reversed view
//! 3. **Short keys** - batches of URL-sized and 32-byte strings
//! 4. **std integration** - `HashMap` inserts through `WyBuildHasher`
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench digest
//! cargo bench --bench digest -- "2_storage"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::{hash_map::RandomState, HashMap};
use std::hash::BuildHasher;
use wydigest::{ByteOrder, ByteView, ExternalBuffer, HashConfig, WyBuildHasher};

mod common;
use common::*;

// BENCHMARK 1: Input Size Scaling

fn bench_input_size_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("1_input_size_scaling");
    let config = HashConfig::default();

    for &size in INPUT_SIZES {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("slice", size), &data, |b, data| {
            b.iter(|| black_box(config.hash(black_box(data))));
        });
    }

    group.finish();
}

// BENCHMARK 2: Storage Kinds

/// Same bytes, three storage paths. Foreign-order buffers pay for the
/// normalizing decorator on every read.
fn bench_storage_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("2_storage_kinds");
    let config = HashConfig::default().with_seed(0x9e37_79b9);
    let foreign = ByteOrder::NATIVE.reverse();

    for &size in &[16usize, 64, 1024, 16384] {
        let data = random_bytes(size);
        let native = ExternalBuffer::copy_from_slice(&data, ByteOrder::NATIVE);
        let swapped = ExternalBuffer::copy_from_slice(&data, foreign);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("borrowed", size), &data, |b, data| {
            let view = ByteView::new(data);
            b.iter(|| black_box(config.hash_view(black_box(&view))));
        });

        group.bench_with_input(BenchmarkId::new("external_native", size), &native, |b, buf| {
            let view = buf.view();
            b.iter(|| black_box(config.hash_view(black_box(&view))));
        });

        group.bench_with_input(BenchmarkId::new("external_foreign", size), &swapped, |b, buf| {
            let view = buf.view();
            b.iter(|| black_box(config.hash_view(black_box(&view))));
        });

        group.bench_with_input(BenchmarkId::new("reversed", size), &data, |b, data| {
            let view = ByteView::new(data).with_order(foreign);
            b.iter(|| black_box(config.hash_view(black_box(&view))));
        });
    }

    group.finish();
}

// BENCHMARK 3: Short Keys

fn bench_short_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("3_short_keys");
    let config = HashConfig::default();

    let urls = generate_urls(10_000);
    let strings_32 = generate_strings(10_000, 32);
    let numbers = generate_u64s(10_000);

    group.throughput(Throughput::Elements(1));

    group.bench_function("url", |b| {
        let mut idx = 0;
        b.iter(|| {
            let item = &urls[idx % urls.len()];
            idx += 1;
            black_box(config.hash(item.as_bytes()))
        });
    });

    group.bench_function("string_32", |b| {
        let mut idx = 0;
        b.iter(|| {
            let item = &strings_32[idx % strings_32.len()];
            idx += 1;
            black_box(config.hash(item.as_bytes()))
        });
    });

    group.bench_function("u64_le_bytes", |b| {
        let mut idx = 0;
        b.iter(|| {
            let item = numbers[idx % numbers.len()];
            idx += 1;
            black_box(config.hash(&item.to_le_bytes()))
        });
    });

    group.finish();
}

// BENCHMARK 4: std Integration

fn insert_all<S: BuildHasher>(keys: &[String], build: S) -> usize {
    let mut map = HashMap::with_capacity_and_hasher(keys.len(), build);
    for (i, key) in keys.iter().enumerate() {
        map.insert(key.as_str(), i);
    }
    map.len()
}

fn bench_hashmap_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("4_hashmap_insert");
    let keys = generate_urls(10_000);
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("wyhash", |b| {
        b.iter(|| black_box(insert_all(&keys, WyBuildHasher::new())));
    });

    group.bench_function("std_siphash", |b| {
        b.iter(|| black_box(insert_all(&keys, RandomState::new())));
    });

    group.finish();
}

criterion_group!(
    performance_benches,
    bench_input_size_scaling,
    bench_storage_kinds,
    bench_short_keys,
);

criterion_group!(integration_benches, bench_hashmap_insert);

criterion_main!(performance_benches, integration_benches);
