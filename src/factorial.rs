//! Factorials in `u64`.
//!
//! `20!` is the largest factorial that fits; both variants return `None` from
//! `21!` on instead of wrapping.

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u32 = 20;

/// Straight product `2 * 3 * ... * n`.
pub fn factorial_iterative(n: u32) -> Option<u64> {
    let mut result = 1u64;
    for i in 2..=u64::from(n) {
        result = result.checked_mul(i)?;
    }
    Some(result)
}

/// Memoized factorials, owned by the caller.
///
/// `memo[k]` holds `k!`. A lookup for `n` extends the table with
/// `memo[k] = k * memo[k - 1]` up to `n`; later lookups for anything already in
/// the table are a single index.
#[derive(Debug, Clone)]
pub struct FactorialMemo {
    memo: Vec<u64>,
}

impl Default for FactorialMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorialMemo {
    pub fn new() -> Self {
        // 0! and 1!
        Self { memo: vec![1, 1] }
    }

    pub fn get(&mut self, n: u32) -> Option<u64> {
        if n > MAX_FACTORIAL_INPUT {
            return None;
        }
        let n = n as usize;
        while self.memo.len() <= n {
            let k = self.memo.len();
            let prev = self.memo[k - 1];
            self.memo.push(prev * k as u64);
        }
        Some(self.memo[n])
    }

    /// Number of cached entries. Starts at 2 (`0!` and `1!`) and only grows.
    pub fn cached_len(&self) -> usize {
        self.memo.len()
    }
}
