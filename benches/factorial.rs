use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dc_algorithms::{FactorialMemo, factorial_iterative};

const INPUTS: &[u32] = &[5, 10, 15, 20];

fn bench_factorial_iterative(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial_iterative");
    for &n in INPUTS {
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(factorial_iterative(black_box(n))));
        });
    }
    group.finish();
}

fn bench_factorial_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial_memo");
    for &n in INPUTS {
        // Warm cache: every lookup after the first is a single index.
        group.bench_function(BenchmarkId::new("warm", n), |b| {
            let mut memo = FactorialMemo::new();
            b.iter(|| black_box(memo.get(black_box(n))));
        });
        group.bench_function(BenchmarkId::new("cold", n), |b| {
            b.iter(|| {
                let mut memo = FactorialMemo::new();
                black_box(memo.get(black_box(n)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factorial_iterative, bench_factorial_memo);
criterion_main!(benches);
