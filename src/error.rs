use thiserror::Error;

/// Errors reported by the checked matrix entry points.
///
/// The slice-level kernels never fail; these are detected once, before any
/// recursion starts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MatmulError {
    /// Operands differ in size, rows are ragged, or a buffer is not `n * n` long.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The matrix size cannot be multiplied (currently only `n == 0`).
    #[error("invalid matrix size: n = {n}")]
    InvalidSize { n: usize },
}
