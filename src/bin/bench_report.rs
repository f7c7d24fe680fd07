use std::hint::black_box;
use std::time::Instant;

use dc_algorithms::logging;
use dc_algorithms::{
    DEFAULT_VALUE_RANGE, FactorialMemo, MatmulFn, Matrix, count_primes_brute_force,
    count_primes_sqrt, factorial_iterative, matmul_brute_force, matmul_strassen, matrices_equal,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

const FACTORIAL_INPUTS: &[u32] = &[5, 10, 15, 20];
const FACTORIAL_ITERS: u32 = 1_000_000;

const MATMUL_SIZES: &[usize] = &[2, 4, 8, 128];
const MATMUL_ITERS: u32 = 10;

const PRIME_LIMITS: &[u64] = &[1_000, 5_000, 10_000];
const PRIME_ITERS: u32 = 10;

const SEPARATOR: &str = "------------------------";

fn main() {
    logging::init_subscriber();

    let mut rng = StdRng::from_entropy();
    run_factorial_suite();
    run_matmul_suite(&mut rng);
    run_prime_suite();
}

/// Result of the last call plus the mean wall time per call.
struct Timed<T> {
    value: T,
    avg_ns: f64,
}

fn time_avg<T>(iters: u32, mut func: impl FnMut() -> T) -> Timed<T> {
    debug_assert!(iters > 0);
    let start = Instant::now();
    let mut value = black_box(func());
    for _ in 1..iters {
        value = black_box(func());
    }
    let elapsed = start.elapsed();
    Timed {
        value,
        avg_ns: elapsed.as_nanos() as f64 / f64::from(iters),
    }
}

fn format_factorial(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "overflow".to_string(),
    }
}

fn run_factorial_suite() {
    println!("Testing Factorial Algorithms\n");

    // One cache for the whole suite: later cases hit entries filled by earlier ones.
    let mut memo = FactorialMemo::new();

    for (case, &n) in FACTORIAL_INPUTS.iter().enumerate() {
        info!(case = case + 1, n, iters = FACTORIAL_ITERS, "factorial case");
        println!("\nTest Case {}: Calculating {n}!", case + 1);

        let brute = time_avg(FACTORIAL_ITERS, || factorial_iterative(black_box(n)));
        let memoized = time_avg(FACTORIAL_ITERS, || memo.get(black_box(n)));
        if brute.value != memoized.value {
            warn!(n, "factorial variants disagree");
        }

        println!("Brute Force:");
        println!("Result: {}", format_factorial(brute.value));
        println!("Average Time: {:.2} nanoseconds", brute.avg_ns);
        println!();
        println!("Divide & Conquer:");
        println!("Result: {}", format_factorial(memoized.value));
        println!("Average Time: {:.2} nanoseconds", memoized.avg_ns);
        println!("{SEPARATOR}");
    }
}

fn bench_matmul(a: &Matrix, b: &Matrix, out: &mut Matrix, func: MatmulFn) -> f64 {
    let n = a.size();
    let timed = time_avg(MATMUL_ITERS, || {
        func(
            black_box(a.as_slice()),
            black_box(b.as_slice()),
            black_box(out.as_mut_slice()),
            n,
        );
    });
    timed.avg_ns
}

fn run_matmul_suite(rng: &mut StdRng) {
    println!("\nTesting Matrix Multiplication Algorithms\n");

    for (case, &n) in MATMUL_SIZES.iter().enumerate() {
        info!(case = case + 1, n, iters = MATMUL_ITERS, "matmul case");
        println!("\nTest Case {}: {n}x{n} matrices", case + 1);

        let a = Matrix::random(n, DEFAULT_VALUE_RANGE, rng);
        let b = Matrix::random(n, DEFAULT_VALUE_RANGE, rng);
        let mut c_brute = Matrix::zeros(n);
        let mut c_strassen = Matrix::zeros(n);

        let brute_ns = bench_matmul(&a, &b, &mut c_brute, matmul_brute_force);
        let strassen_ns = bench_matmul(&a, &b, &mut c_strassen, matmul_strassen);

        let matches = matrices_equal(c_brute.as_slice(), c_strassen.as_slice(), n);
        if !matches {
            warn!(n, "strassen result differs from brute force");
        }
        debug!(n, brute_ns, strassen_ns, matches, "matmul case done");

        println!("Brute Force:");
        println!("Average Time: {brute_ns:.2} nanoseconds");
        println!();
        println!("Divide & Conquer:");
        println!("Average Time: {strassen_ns:.2} nanoseconds");
        println!();
        println!("Results Match: {}", if matches { "Yes" } else { "No" });
        println!("{SEPARATOR}");
    }
}

fn run_prime_suite() {
    println!("\nTesting Prime Number Algorithms\n");

    for (case, &limit) in PRIME_LIMITS.iter().enumerate() {
        info!(case = case + 1, limit, iters = PRIME_ITERS, "prime case");
        println!("\nTest Case {}: Range = 1 to {limit}", case + 1);

        let brute = time_avg(PRIME_ITERS, || count_primes_brute_force(black_box(limit)));
        let sqrt = time_avg(PRIME_ITERS, || count_primes_sqrt(black_box(limit)));
        if brute.value != sqrt.value {
            warn!(limit, "prime counts disagree");
        }

        println!("Brute Force:");
        println!("Number of Primes: {}", brute.value);
        println!("Average Time: {:.2} nanoseconds", brute.avg_ns);
        println!("\nDivide and Conquer:");
        println!("Number of Primes: {}", sqrt.value);
        println!("Average Time: {:.2} nanoseconds", sqrt.avg_ns);
        println!("{SEPARATOR}");
    }
}
