//! Primality tests and prime counting.
//!
//! Both predicates share the same prelude (reject `n <= 1`, accept 2 and 3,
//! reject multiples of 2 and 3) and differ only in how far they search:
//!
//! - [`is_prime_brute_force`] trial-divides by every odd `i` in `5..n`, O(n).
//! - [`is_prime_sqrt`] only tests `6k ± 1` candidates up to `√n`, O(√n).
//!   Every prime above 3 has that form, so nothing is missed.

pub fn is_prime_brute_force(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    while i < n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

pub fn is_prime_sqrt(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` is `i * i <= n` without the overflow.
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Number of primes in `2..=limit`, using [`is_prime_brute_force`].
pub fn count_primes_brute_force(limit: u64) -> usize {
    (2..=limit).filter(|&n| is_prime_brute_force(n)).count()
}

/// Number of primes in `2..=limit`, using [`is_prime_sqrt`].
pub fn count_primes_sqrt(limit: u64) -> usize {
    (2..=limit).filter(|&n| is_prime_sqrt(n)).count()
}
