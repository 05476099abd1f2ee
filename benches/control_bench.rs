//! Benchmark for the containers and do-notation: Lazy, Task, traversal and
//! `mdo!` against hand-written matching.
//!
//! Measures the overhead of monadkit's abstractions over plain control flow.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use monadkit::compose::run;
use monadkit::control::{Lazy, List, Maybe, Result, Validated};
use monadkit::effect::{ImmediateExecutor, Task};
use monadkit::mdo;
use std::hint::black_box;
use std::sync::Arc;

// =============================================================================
// Lazy Benchmarks
// =============================================================================

fn benchmark_lazy_force(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_force");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("initial", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let lazy = Lazy::new(move || (0..size).sum::<u64>());
                black_box(lazy.value().ok().copied())
            });
        });
    }

    let cached = Lazy::new(|| (0..1000_u64).sum::<u64>());
    black_box(cached.force());
    group.bench_function("cached", |bencher| {
        bencher.iter(|| black_box(cached.value().ok().copied()));
    });

    group.finish();
}

fn benchmark_lazy_fmap_chain(criterion: &mut Criterion) {
    criterion.bench_function("lazy_fmap_chain", |bencher| {
        bencher.iter(|| {
            let lazy = Lazy::new(|| black_box(1_u64))
                .fmap(|n| n + 1)
                .fmap(|n| n * 2)
                .fmap(|n| n - 1);
            black_box(lazy.value().ok().copied())
        });
    });
}

// =============================================================================
// Do-notation Benchmarks
// =============================================================================

fn checked(value: u64) -> Result<u64, &'static str> {
    if value > 1_000_000 {
        Result::failure("too large")
    } else {
        Result::success(value)
    }
}

fn benchmark_do_notation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("do_notation");

    group.bench_function("mdo", |bencher| {
        bencher.iter(|| {
            let total: Result<u64, &str> = mdo! {
                a <= checked(black_box(10));
                b <= checked(black_box(20));
                c <= checked(black_box(30));
                yield a + b + c
            };
            black_box(total)
        });
    });

    group.bench_function("nested_bind", |bencher| {
        bencher.iter(|| {
            let total = checked(black_box(10)).bind(|a| {
                checked(black_box(20)).bind(move |b| checked(black_box(30)).fmap(move |c| a + b + c))
            });
            black_box(total)
        });
    });

    group.bench_function("early_halt", |bencher| {
        bencher.iter(|| {
            let total: Result<u64, &str> = run(|scope| {
                let a = scope.bind(checked(black_box(2_000_000)))?;
                let b = scope.bind(checked(black_box(20)))?;
                scope.pure(a + b)
            });
            black_box(total)
        });
    });

    group.finish();
}

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn benchmark_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse");

    for size in [100, 1000, 10000] {
        let list: List<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("maybe", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.clone().traverse(Maybe::some)));
        });

        group.bench_with_input(BenchmarkId::new("validated", size), &list, |bencher, list| {
            bencher.iter(|| {
                black_box(list.clone().traverse_validated(Validated::<u64, &str>::valid))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Task Benchmarks
// =============================================================================

fn benchmark_task(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("task");

    group.bench_function("immediate_fmap", |bencher| {
        let executor = Arc::new(ImmediateExecutor);
        bencher.iter(|| {
            let task = Task::with_executor(executor.clone(), || black_box(1_u64)).fmap(|n| n + 1);
            black_box(task.value())
        });
    });

    group.bench_function("thread_spawn", |bencher| {
        bencher.iter(|| black_box(Task::new(|| black_box(1_u64)).value()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lazy_force,
    benchmark_lazy_fmap_chain,
    benchmark_do_notation,
    benchmark_traverse,
    benchmark_task
);

criterion_main!(benches);
