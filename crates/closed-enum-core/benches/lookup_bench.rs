//! # Lookup Benchmarks
//!
//! Performance benchmarks for discovery and name resolution.
//!
//! Run with: `cargo bench -p closed-enum-core`

use closed_enum_core::{Catalog, ClosedEnumeration, Frequency, Weekday, from_name, names_of};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    group.bench_function("get_all_weekday", |b| {
        b.iter(|| black_box(Weekday::all().count()))
    });
    group.bench_function("describe_frequency", |b| {
        b.iter(|| black_box(names_of::<Frequency>()))
    });

    group.finish();
}

fn bench_from_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_name");

    for input in ["MO", "su", "Funday"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, &input| {
            b.iter(|| black_box(from_name::<Weekday>(input).is_ok()))
        });
    }

    group.finish();
}

fn bench_catalog_resolve(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog");

    c.bench_function("catalog_resolve", |b| {
        b.iter(|| black_box(catalog.resolve("frequency", "yearly").is_ok()))
    });
}

criterion_group!(
    benches,
    bench_discovery,
    bench_from_name,
    bench_catalog_resolve
);
criterion_main!(benches);
