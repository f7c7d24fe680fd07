//! Square `i64` matrices and the elementwise helpers used by the multiply kernels.
//!
//! Storage is one contiguous row-major buffer with stride `n`, so element `(i, j)`
//! lives at `i * n + j`. The slice-level functions ([`matrix_add`], [`matrix_sub`],
//! [`matrices_equal`]) take the size separately and only `debug_assert!` the buffer
//! lengths; [`Matrix`] owns the size and offers checked wrappers.
//!
//! Elementwise arithmetic wraps mod 2^64. Strassen's pre-combinations can leave the
//! `i64` range even when the final product fits; since wrapping preserves the ring
//! identities, the end result is still exact in that case.

use std::ops::{Index, IndexMut, RangeInclusive};

use rand::Rng;
use rand::distributions::Uniform;

use crate::MatmulError;

/// Value range used by the benchmark harness for random inputs.
///
/// Small enough that sums of products stay far from `i64` overflow.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i64> = 1..=10;

#[inline]
pub(crate) fn check_dims(a: &[i64], b: &[i64], c: &[i64], n: usize) {
    let len = n * n;
    debug_assert_eq!(a.len(), len);
    debug_assert_eq!(b.len(), len);
    debug_assert_eq!(c.len(), len);
}

/// `c = a + b`, elementwise, wrapping on overflow.
pub fn matrix_add(a: &[i64], b: &[i64], c: &mut [i64], n: usize) {
    check_dims(a, b, c, n);
    for ((dst, &x), &y) in c.iter_mut().zip(a).zip(b) {
        *dst = x.wrapping_add(y);
    }
}

/// `c = a - b`, elementwise, wrapping on overflow.
pub fn matrix_sub(a: &[i64], b: &[i64], c: &mut [i64], n: usize) {
    check_dims(a, b, c, n);
    for ((dst, &x), &y) in c.iter_mut().zip(a).zip(b) {
        *dst = x.wrapping_sub(y);
    }
}

/// Returns `true` iff every element of `a` equals the matching element of `b`.
///
/// Stops at the first mismatch.
pub fn matrices_equal(a: &[i64], b: &[i64], n: usize) -> bool {
    let len = n * n;
    debug_assert_eq!(a.len(), len);
    debug_assert_eq!(b.len(), len);
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Copies the four `half x half` quadrants of `src` into fresh buffers.
///
/// Order is top-left, top-right, bottom-left, bottom-right. `n` must be even.
pub fn split_quadrants(src: &[i64], n: usize) -> [Vec<i64>; 4] {
    debug_assert_eq!(src.len(), n * n);
    debug_assert_eq!(n % 2, 0);
    let half = n / 2;
    let mut q11 = Vec::with_capacity(half * half);
    let mut q12 = Vec::with_capacity(half * half);
    let mut q21 = Vec::with_capacity(half * half);
    let mut q22 = Vec::with_capacity(half * half);
    for i in 0..half {
        let top = i * n;
        let bottom = (i + half) * n;
        q11.extend_from_slice(&src[top..top + half]);
        q12.extend_from_slice(&src[top + half..top + n]);
        q21.extend_from_slice(&src[bottom..bottom + half]);
        q22.extend_from_slice(&src[bottom + half..bottom + n]);
    }
    [q11, q12, q21, q22]
}

/// A square `n x n` matrix of `i64` in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// All-zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Ones on the diagonal, zeros elsewhere.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Wraps a row-major buffer, which must hold exactly `n * n` values.
    pub fn from_vec(n: usize, data: Vec<i64>) -> Result<Self, MatmulError> {
        if data.len() != n * n {
            return Err(MatmulError::DimensionMismatch {
                expected: n * n,
                found: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from rows; every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, MatmulError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatmulError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Uniformly random entries drawn from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn random<R: Rng>(n: usize, range: RangeInclusive<i64>, rng: &mut R) -> Self {
        let dist = Uniform::from(range);
        let data = (0..n * n).map(|_| rng.sample(&dist)).collect();
        Self { n, data }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<i64> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[i64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.data
    }

    /// Elementwise sum (wrapping), checking that both operands have the same size.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatmulError> {
        self.ensure_same_size(rhs)?;
        let mut out = Matrix::zeros(self.n);
        matrix_add(&self.data, &rhs.data, &mut out.data, self.n);
        Ok(out)
    }

    /// Elementwise difference (wrapping), checking that both operands have the same size.
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, MatmulError> {
        self.ensure_same_size(rhs)?;
        let mut out = Matrix::zeros(self.n);
        matrix_sub(&self.data, &rhs.data, &mut out.data, self.n);
        Ok(out)
    }

    pub(crate) fn ensure_same_size(&self, rhs: &Matrix) -> Result<(), MatmulError> {
        if self.n != rhs.n {
            return Err(MatmulError::DimensionMismatch {
                expected: self.n,
                found: rhs.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &i64 {
        assert!(j < self.n, "column {j} out of range for n={}", self.n);
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut i64 {
        assert!(j < self.n, "column {j} out of range for n={}", self.n);
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn square(n: usize, values: Vec<i64>) -> Matrix {
        Matrix::from_vec(n, values).unwrap()
    }

    fn matrix_strategy() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1usize..=8).prop_flat_map(|n| {
            let elems = proptest::collection::vec(-1_000i64..=1_000, n * n);
            (elems.clone(), elems).prop_map(move |(a, b)| (square(n, a), square(n, b)))
        })
    }

    proptest! {
        /// (a + b) - b == a
        #[test]
        fn add_then_sub_round_trips((a, b) in matrix_strategy()) {
            let sum = a.add(&b).unwrap();
            prop_assert_eq!(sum.sub(&b).unwrap(), a);
        }

        /// a + b == b + a
        #[test]
        fn add_commutes((a, b) in matrix_strategy()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        /// a - a == 0
        #[test]
        fn sub_self_is_zero((a, _b) in matrix_strategy()) {
            prop_assert_eq!(a.sub(&a).unwrap(), Matrix::zeros(a.size()));
        }
    }

    #[test]
    fn add_and_sub_known_values() {
        let a = Matrix::from_rows(&[[1i64, 2], [3, 4]]).unwrap();
        let b = Matrix::from_rows(&[[5i64, 6], [7, 8]]).unwrap();
        assert_eq!(a.add(&b).unwrap().as_slice(), &[6, 8, 10, 12]);
        assert_eq!(a.sub(&b).unwrap().as_slice(), &[-4, -4, -4, -4]);
    }

    #[test]
    fn add_and_sub_wrap_at_the_edges() {
        let a = Matrix::from_rows(&[[i64::MAX, i64::MIN], [1, -1]]).unwrap();
        let b = Matrix::from_rows(&[[1i64, -1], [i64::MAX, i64::MIN]]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.as_slice(), &[i64::MIN, i64::MAX, i64::MIN, i64::MAX]);
        assert_eq!(sum.sub(&b).unwrap(), a);
    }

    #[test]
    fn add_rejects_mismatched_sizes() {
        let a = Matrix::zeros(2);
        let b = Matrix::zeros(3);
        assert_eq!(
            a.add(&b),
            Err(MatmulError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
        assert!(a.sub(&b).is_err());
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows: Vec<Vec<i64>> = vec![vec![1, 2], vec![3]];
        assert_eq!(
            Matrix::from_rows(&rows),
            Err(MatmulError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let rows = [[1i64, 2, 3], [4, 5, 6]];
        assert!(Matrix::from_rows(&rows).is_err());
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert_eq!(
            Matrix::from_vec(3, vec![0; 8]),
            Err(MatmulError::DimensionMismatch {
                expected: 9,
                found: 8
            })
        );
    }

    #[test]
    fn identity_layout() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(id[(i, j)], i64::from(i == j), "i={i} j={j}");
            }
        }
    }

    #[test]
    fn accessors_agree() {
        let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as i64);
        assert_eq!(m.row(1), &[3, 4, 5]);
        assert_eq!(m.get(2, 1), Some(7));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m[(0, 2)], 2);
    }

    #[test]
    fn matrices_equal_detects_single_mismatch() {
        let a: Vec<i64> = (0..16).collect();
        let mut b = a.clone();
        assert!(matrices_equal(&a, &b, 4));
        b[15] = -1;
        assert!(!matrices_equal(&a, &b, 4));
        b[15] = 15;
        b[0] = 99;
        assert!(!matrices_equal(&a, &b, 4));
    }

    #[test]
    fn split_quadrants_copies_blocks() {
        let src: Vec<i64> = (1..=16).collect();
        let [q11, q12, q21, q22] = split_quadrants(&src, 4);
        assert_eq!(q11, vec![1, 2, 5, 6]);
        assert_eq!(q12, vec![3, 4, 7, 8]);
        assert_eq!(q21, vec![9, 10, 13, 14]);
        assert_eq!(q22, vec![11, 12, 15, 16]);
    }

    #[test]
    fn random_respects_range_and_seed() {
        let mut rng = StdRng::seed_from_u64(0xC0FF_EE42);
        let m = Matrix::random(16, DEFAULT_VALUE_RANGE, &mut rng);
        assert!(m.as_slice().iter().all(|v| DEFAULT_VALUE_RANGE.contains(v)));

        let mut again = StdRng::seed_from_u64(0xC0FF_EE42);
        assert_eq!(Matrix::random(16, DEFAULT_VALUE_RANGE, &mut again), m);
    }
}
