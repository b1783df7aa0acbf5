//! Benchmark for List against the standard Vec.
//!
//! Measures the operations whose cost the persistent list documents:
//! O(1) `cons`, and the O(n) traversals `map`, `filter`, `append` and
//! `flatten_maybe`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadic::control::Maybe;
use monadic::persistent::List;
use std::hint::black_box;

// =============================================================================
// cons Benchmark (prepend)
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::nil();
                for index in 0..size {
                    list = list.cons(black_box(index));
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec_insert_front", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.insert(0, black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// map / filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let list: List<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| {
                let result = black_box(&list).map(|n| n * 2).filter(|n| n % 3 == 0);
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, _| {
            bencher.iter(|| {
                let result: Vec<i64> = black_box(&vector)
                    .iter()
                    .map(|n| n * 2)
                    .filter(|n| n % 3 == 0)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// append Benchmark
// =============================================================================

fn benchmark_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("append");

    for size in [100, 1000, 10000] {
        let first: List<i64> = (0..size).collect();
        let second: List<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&first).append(black_box(&second))));
        });
    }

    group.finish();
}

// =============================================================================
// flatten_maybe Benchmark
// =============================================================================

fn benchmark_flatten_maybe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten_maybe");

    for size in [100, 1000, 10000] {
        let list: List<Maybe<i64>> = (0..size)
            .map(|n| if n % 2 == 0 { Maybe::Some(n) } else { Maybe::None })
            .collect();

        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, _| {
            bencher.iter(|| black_box(black_box(&list).flatten_maybe()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cons,
    benchmark_map_filter,
    benchmark_append,
    benchmark_flatten_maybe
);

criterion_main!(benches);
