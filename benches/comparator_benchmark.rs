// ============================================================================
// Decimal Comparator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Compare - Per-cell cost of parsing and ranking a candidate
// 2. Construction - Building comparators from integers and text
// 3. Wire - Envelope encoding and decoding
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_comparator::prelude::*;
use std::hint::black_box;

// ============================================================================
// Compare Benchmarks
// Scan-time cost per cell
// ============================================================================

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let comparator = DecimalByteComparator::from_i64_with_locale(50_000, Locale::us());

    let candidates: [(&str, &[u8]); 5] = [
        ("integer", b"49999"),
        ("fraction", b"49999.999999"),
        ("grouped", b"1,234,567.89"),
        ("wide", b"123456789012345678901234567890.123456789"),
        ("non_numeric", b"not-a-number"),
    ];

    for (name, candidate) in candidates {
        group.bench_with_input(BenchmarkId::new("en-US", name), candidate, |b, candidate| {
            b.iter(|| black_box(comparator.compare(black_box(candidate))));
        });
    }

    let de = DecimalByteComparator::from_i64_with_locale(50_000, Locale::germany());
    group.bench_function(BenchmarkId::new("de-DE", "grouped"), |b| {
        b.iter(|| black_box(de.compare(black_box(b"1.234.567,89"))));
    });

    group.finish();
}

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("from_i64", |b| {
        b.iter(|| {
            black_box(DecimalByteComparator::from_i64_with_locale(
                black_box(42),
                Locale::us(),
            ))
        });
    });

    group.bench_function("from_bytes", |b| {
        b.iter(|| {
            black_box(DecimalByteComparator::from_bytes_with_locale(
                black_box(&b"-12,345.678"[..]),
                Locale::us(),
            ))
        });
    });

    group.finish();
}

// ============================================================================
// Wire Benchmarks
// ============================================================================

fn benchmark_wire(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    let comparator =
        DecimalByteComparator::from_bytes_with_locale("98765.4321", Locale::us()).unwrap();
    let wire = comparator.to_byte_array();

    group.bench_function("to_byte_array", |b| {
        b.iter(|| black_box(comparator.to_byte_array()));
    });

    group.bench_function("parse_from", |b| {
        b.iter(|| {
            black_box(DecimalByteComparator::parse_from_with_locale(
                black_box(&wire),
                Locale::us(),
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_compare,
    benchmark_construction,
    benchmark_wire
);
criterion_main!(benches);
