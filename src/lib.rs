//! Brute force vs. divide & conquer, side by side.
//!
//! Each module pairs a straightforward implementation with an asymptotically
//! faster one and keeps both public, so benches and tests can compare them on
//! the same inputs.
//!
//! # Algorithms
//!
//! - **Matrix multiplication** ([`matmul_brute_force`], [`matmul_strassen`], [`multiply`]):
//!   O(n³) triple loop vs. Strassen's seven-product recursion
//! - **Primality** ([`is_prime_brute_force`], [`is_prime_sqrt`]): trial division
//!   vs. `6k ± 1` candidates up to `√n`
//! - **Factorial** ([`factorial_iterative`], [`FactorialMemo`]): running product
//!   vs. a caller-owned memo table
//!
//! Matrices are square `i64` buffers ([`Matrix`]). The checked entry points
//! return [`MatmulError`]; the slice kernels assume well-formed input.

mod error;
mod factorial;
pub mod logging;
mod matmul;
mod matrix;
mod prime;

pub use error::*;
pub use factorial::*;
pub use matmul::*;
pub use matrix::*;
pub use prime::*;
