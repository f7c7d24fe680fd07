//! Square integer matrix multiplication (C = A x B).
//!
//! All matrices are `n x n` in row-major order.
//!
//! # Strategies
//!
//! | Function | Strategy | Cost |
//! |----------|----------|------|
//! | [`matmul_brute_force`] | i-j-k loops, skipping zero factors | O(n³) |
//! | [`matmul_strassen`] | Quadrant split, 7 recursive products | O(n^log2(7)) ≈ O(n^2.807) |
//!
//! The slice kernels trust their inputs. [`multiply`] and [`multiply_brute_force`]
//! validate the operands once and allocate the result.
//!
//! # Odd sizes
//!
//! Strassen needs an exact halving at every level. A frame whose `n` is odd (and
//! greater than the base case) multiplies by brute force instead, so `n = 12`
//! recurses once to `6`, once more to `3`, and finishes there. The result is
//! still exact; only the speed-up is lost below that level.
//!
//! # Overflow
//!
//! Both kernels wrap mod 2^64. Strassen forms sums such as `A11 + A22` that can
//! leave the `i64` range even when the product itself fits; wrapping keeps the
//! ring identities, so the result is exact whenever the true product fits and
//! both kernels always return the same matrix.
//!
//! # References
//!
//! - V. Strassen, "Gaussian elimination is not optimal", Numer. Math. 13 (1969).

use tracing::debug;

use crate::matrix::{check_dims, matrix_add, matrix_sub, split_quadrants};
use crate::{Matrix, MatmulError};

/// Largest size handled directly by brute force inside [`matmul_strassen`].
pub const STRASSEN_BASE_CASE: usize = 2;

/// Slice-level kernel signature shared by both strategies.
pub type MatmulFn = fn(&[i64], &[i64], &mut [i64], usize);

/// Brute-force multiplication (i-j-k order).
///
/// Terms where either factor is zero are skipped; the sum is the same as the
/// unconditional triple loop. Arithmetic wraps on overflow.
pub fn matmul_brute_force(a: &[i64], b: &[i64], c: &mut [i64], n: usize) {
    check_dims(a, b, c, n);
    for i in 0..n {
        let a_row = i * n;
        for j in 0..n {
            let mut sum = 0i64;
            for k in 0..n {
                let x = a[a_row + k];
                let y = b[k * n + j];
                if x != 0 && y != 0 {
                    sum = sum.wrapping_add(x.wrapping_mul(y));
                }
            }
            c[a_row + j] = sum;
        }
    }
}

/// Strassen's divide & conquer multiplication.
///
/// Falls back to [`matmul_brute_force`] for `n <= STRASSEN_BASE_CASE` and for odd
/// `n`. Every quadrant and intermediate product is owned by the frame that
/// creates it.
pub fn matmul_strassen(a: &[i64], b: &[i64], c: &mut [i64], n: usize) {
    check_dims(a, b, c, n);
    if n <= STRASSEN_BASE_CASE {
        matmul_brute_force(a, b, c, n);
        return;
    }
    if n % 2 != 0 {
        debug!(n, "odd frame, falling back to brute force");
        matmul_brute_force(a, b, c, n);
        return;
    }

    let half = n / 2;
    let len = half * half;

    let [a11, a12, a21, a22] = split_quadrants(a, n);
    let [b11, b12, b21, b22] = split_quadrants(b, n);

    let mut t1 = vec![0i64; len];
    let mut t2 = vec![0i64; len];
    let mut p1 = vec![0i64; len];
    let mut p2 = vec![0i64; len];
    let mut p3 = vec![0i64; len];
    let mut p4 = vec![0i64; len];
    let mut p5 = vec![0i64; len];
    let mut p6 = vec![0i64; len];
    let mut p7 = vec![0i64; len];

    // P1 = A11 (B12 - B22)
    matrix_sub(&b12, &b22, &mut t1, half);
    matmul_strassen(&a11, &t1, &mut p1, half);

    // P2 = (A11 + A12) B22
    matrix_add(&a11, &a12, &mut t1, half);
    matmul_strassen(&t1, &b22, &mut p2, half);

    // P3 = (A21 + A22) B11
    matrix_add(&a21, &a22, &mut t1, half);
    matmul_strassen(&t1, &b11, &mut p3, half);

    // P4 = A22 (B21 - B11)
    matrix_sub(&b21, &b11, &mut t1, half);
    matmul_strassen(&a22, &t1, &mut p4, half);

    // P5 = (A11 + A22)(B11 + B22)
    matrix_add(&a11, &a22, &mut t1, half);
    matrix_add(&b11, &b22, &mut t2, half);
    matmul_strassen(&t1, &t2, &mut p5, half);

    // P6 = (A12 - A22)(B21 + B22)
    matrix_sub(&a12, &a22, &mut t1, half);
    matrix_add(&b21, &b22, &mut t2, half);
    matmul_strassen(&t1, &t2, &mut p6, half);

    // P7 = (A11 - A21)(B11 + B12)
    matrix_sub(&a11, &a21, &mut t1, half);
    matrix_add(&b11, &b12, &mut t2, half);
    matmul_strassen(&t1, &t2, &mut p7, half);

    for i in 0..half {
        let top = i * n;
        let bottom = (i + half) * n;
        for j in 0..half {
            let q = i * half + j;
            c[top + j] = p5[q]
                .wrapping_add(p4[q])
                .wrapping_sub(p2[q])
                .wrapping_add(p6[q]);
            c[top + half + j] = p1[q].wrapping_add(p2[q]);
            c[bottom + j] = p3[q].wrapping_add(p4[q]);
            c[bottom + half + j] = p5[q]
                .wrapping_add(p1[q])
                .wrapping_sub(p3[q])
                .wrapping_sub(p7[q]);
        }
    }
}

fn validate(a: &Matrix, b: &Matrix) -> Result<usize, MatmulError> {
    a.ensure_same_size(b)?;
    let n = a.size();
    if n == 0 {
        return Err(MatmulError::InvalidSize { n });
    }
    Ok(n)
}

fn multiply_with(a: &Matrix, b: &Matrix, kernel: MatmulFn) -> Result<Matrix, MatmulError> {
    let n = validate(a, b)?;
    let mut out = Matrix::zeros(n);
    kernel(a.as_slice(), b.as_slice(), out.as_mut_slice(), n);
    Ok(out)
}

/// Multiplies two square matrices with [`matmul_strassen`].
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if the operands differ in size,
/// [`MatmulError::InvalidSize`] if they are empty.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatmulError> {
    let n = a.size();
    debug!(n, "strassen multiply");
    if n > STRASSEN_BASE_CASE && !n.is_power_of_two() {
        debug!(n, "size is not a power of two, Strassen stops at the first odd level");
    }
    multiply_with(a, b, matmul_strassen)
}

/// Multiplies two square matrices with [`matmul_brute_force`].
///
/// # Errors
///
/// Same as [`multiply`].
pub fn multiply_brute_force(a: &Matrix, b: &Matrix) -> Result<Matrix, MatmulError> {
    debug!(n = a.size(), "brute force multiply");
    multiply_with(a, b, matmul_brute_force)
}
