//! # Sieve — Bounded Sieve of Eratosthenes
//!
//! The flat sieve over `[0, n]` and its root-bounded twin. Both are the
//! baseline every other algorithm in the crate is checked against, and the
//! source of base primes for the range sieve.
//!
//! ## Algorithm
//!
//! One bit per integer in `[0, n]`, all set except 0 and 1. For each `i` with
//! `i*i ≤ n` still set, clear `i*i, i*i + i, ...` up to `n`. Multiples below
//! `i*i` already have a smaller prime factor and were struck earlier.
//! Complexity: O(n log log n) time, O(n) bits of space.
//!
//! `i*i ≤ n` is tested as `i ≤ n / i` so the loop is exact up to `u64::MAX`.

use crate::bitmap::{span_len, Bitmap};

/// Generate all primes `≤ n` in ascending order.
///
/// Returns an empty vector for `n < 2`.
///
/// # Panics
/// Panics if `n + 1` bits cannot be addressed on this platform. Use
/// [`crate::segmented_sieve`] or [`crate::find_primes_in_range`] for bounds
/// that do not fit in memory as a single bitmap.
pub fn sieve(n: u64) -> Vec<u64> {
    if n < 2 {
        return vec![];
    }

    let mut candidates = Bitmap::new_all_set(span_len(0, n));
    candidates.clear(0);
    candidates.clear(1);

    let mut i = 2u64;
    while i <= n / i {
        if candidates.get(i as usize) {
            candidates.clear_every((i * i) as usize, i as usize);
        }
        i += 1;
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(n));
    primes.extend(candidates.iter_set_bits().map(|i| i as u64));
    primes
}

/// Generate all primes `≤ n`: the canonical base-prime source.
///
/// Same algorithm and output as [`sieve`]. The argument is the bound itself,
/// not a target whose root is taken: pass `isqrt(target)` to get the primes
/// needed to sieve up to `target`, or use [`base_primes_for`].
pub fn sieve_till_root(n: u64) -> Vec<u64> {
    sieve(n)
}

/// Primes `≤ ⌊√bound⌋`, enough to strike every composite `≤ bound`.
pub fn base_primes_for(bound: u64) -> Vec<u64> {
    sieve_till_root(isqrt(bound))
}

/// Floor of the square root of `n`, exact over the whole `u64` range.
///
/// Starts from the `f64` estimate and corrects the rounding error, which can
/// be off by one above 2^52.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Capacity hint for a prime list up to `n` (about 1.3 · n / ln n).
pub(crate) fn estimate_prime_count(n: u64) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}
