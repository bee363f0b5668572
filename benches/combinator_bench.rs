//! Benchmark for the Result and Option combinators.
//!
//! Compares the free-function combinators against the equivalent std
//! methods, and measures the bulk operations over growing inputs.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcome::{option, result};
use std::hint::black_box;

fn mixed_results(size: usize) -> Vec<Result<usize, String>> {
    (0..size)
        .map(|index| {
            if index % 3 == 0 {
                Err(format!("failed {index}"))
            } else {
                Ok(index)
            }
        })
        .collect()
}

// =============================================================================
// Result Benchmarks
// =============================================================================

fn benchmark_result_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_chain");

    group.bench_function("combinators", |bencher| {
        bencher.iter(|| {
            let parsed: Result<i32, String> = Ok(black_box(21));
            let doubled = result::map(parsed, |n| n * 2);
            let checked = result::flat_map(doubled, |n| {
                n.checked_add(1).ok_or_else(|| "overflow".to_string())
            });
            black_box(result::unwrap_or(checked, 0))
        });
    });

    // Baseline
    group.bench_function("std_methods", |bencher| {
        bencher.iter(|| {
            let parsed: Result<i32, String> = Ok(black_box(21));
            let checked = parsed
                .map(|n| n * 2)
                .and_then(|n| n.checked_add(1).ok_or_else(|| "overflow".to_string()));
            black_box(checked.unwrap_or(0))
        });
    });

    group.finish();
}

fn benchmark_result_bulk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_bulk");

    for size in [10, 100, 1000] {
        let results = mixed_results(size);

        group.bench_with_input(
            BenchmarkId::new("partition", size),
            &results,
            |bencher, results| {
                bencher.iter(|| black_box(result::partition(results.clone())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("collect_ok", size),
            &results,
            |bencher, results| {
                bencher.iter(|| black_box(result::collect_ok(results.clone())));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Option Benchmarks
// =============================================================================

fn benchmark_option_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("option_chain");

    for present in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("filter_map_ok_or_else", present),
            &present,
            |bencher, &present| {
                bencher.iter(|| {
                    let value = if black_box(present) { Some(42) } else { None };
                    let filtered = option::filter(value, |n| n % 2 == 0);
                    let mapped = option::map(filtered, |n| n + 1);
                    black_box(option::ok_or_else(mapped, "missing"))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_result_chain,
    benchmark_result_bulk,
    benchmark_option_chain
);
criterion_main!(benches);
