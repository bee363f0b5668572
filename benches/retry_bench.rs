//! Benchmark for the retry loop and fault capture.
//!
//! Measures the per-attempt overhead of `retry` with no delay, and the
//! cost of intercepting a panic with `try_result`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcome::retry::{RetryPolicy, retry};
use std::hint::black_box;
use std::time::Duration;

// =============================================================================
// Retry Benchmarks
// =============================================================================

fn benchmark_retry_failures(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("retry_failures");

    for failures in [0_usize, 1, 5] {
        group.bench_with_input(
            BenchmarkId::new("succeed_after", failures),
            &failures,
            |bencher, &failures| {
                bencher.iter(|| {
                    let mut calls = 0_usize;
                    let result: Result<usize, usize> = retry(5, Duration::ZERO, || {
                        calls += 1;
                        if calls > failures { Ok(calls) } else { Err(calls) }
                    });
                    black_box(result)
                });
            },
        );
    }

    group.bench_function("exhausted", |bencher| {
        let policy = RetryPolicy::default();
        bencher.iter(|| black_box(policy.run(|| Err::<(), _>(black_box("down")))));
    });

    group.finish();
}

// =============================================================================
// Capture Benchmarks
// =============================================================================

#[cfg(feature = "capture")]
fn benchmark_capture(criterion: &mut Criterion) {
    use outcome::capture::{try_result, try_result_kind};

    let mut group = criterion.benchmark_group("capture");

    group.bench_function("no_panic", |bencher| {
        bencher.iter(|| black_box(try_result(|| black_box(5_i32) + 5).is_ok()));
    });

    // Keep the default hook from flooding stderr while panics are measured.
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    group.bench_function("panic", |bencher| {
        bencher.iter(|| black_box(try_result_kind(|| -> i32 { panic!("boom") })));
    });

    std::panic::set_hook(previous_hook);

    group.finish();
}

#[cfg(not(feature = "capture"))]
fn benchmark_capture(_criterion: &mut Criterion) {}

criterion_group!(benches, benchmark_retry_failures, benchmark_capture);
criterion_main!(benches);
