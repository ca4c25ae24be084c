//! Property-based tests for the primesift sieves.
//!
//! These tests use the `proptest` framework to check that every sieve agrees
//! with the flat bounded sieve across randomly generated bounds, segment
//! widths and windows, including windows far from zero where the flat sieve
//! is too large to run and trial division is the oracle instead.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test property_tests
//!
//! # Increase case count for thorough testing (default is 256):
//! PROPTEST_CASES=10000 cargo test --test property_tests
//! ```
//!
//! Each property is named `prop_<function>_<invariant>`.

use proptest::prelude::*;

fn is_prime_trial(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn strictly_ascending(primes: &[u64]) -> bool {
    primes.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    /// The three flat sieves share one contract and must agree exactly.
    #[test]
    fn prop_flat_sieves_agree(n in 0u64..20_000) {
        let reference = primesift::sieve(n);
        prop_assert_eq!(&primesift::sieve_till_root(n), &reference, "sieve_till_root({})", n);
        prop_assert_eq!(&primesift::sieve_by_odd(n), &reference, "sieve_by_odd({})", n);
    }

    /// Every reported value is prime, within bounds, and reported once.
    #[test]
    fn prop_sieve_values_are_prime_and_ascending(n in 0u64..5_000) {
        let primes = primesift::sieve(n);
        prop_assert!(strictly_ascending(&primes));
        for &p in &primes {
            prop_assert!(is_prime_trial(p), "{} returned by sieve({}) is not prime", p, n);
            prop_assert!(p <= n, "{} > limit {}", p, n);
        }
    }

    /// Segment width never changes the output, whether it divides the range,
    /// is even, is 1, or exceeds n.
    #[test]
    fn prop_segmented_matches_sieve(n in 0u64..30_000, segment_size in 1u64..5_000) {
        let segmented = primesift::segmented_sieve(n, segment_size).unwrap();
        prop_assert_eq!(segmented, primesift::sieve(n), "n={} segment_size={}", n, segment_size);
    }

    /// A window's primes are the flat sieve's primes restricted to the window.
    #[test]
    fn prop_range_matches_filtered_sieve(low in 0u64..20_000, width in 0u64..5_000) {
        let high = low + width;
        let expected: Vec<u64> = primesift::sieve(high)
            .into_iter()
            .filter(|&p| p >= low)
            .collect();
        prop_assert_eq!(
            primesift::find_primes_in_range(low, high).unwrap(),
            expected,
            "low={} high={}", low, high
        );
    }

    /// Far from zero, the range sieve agrees with trial division.
    #[test]
    fn prop_range_far_from_zero(low in 1_000_000_000u64..10_000_000_000, width in 0u64..100) {
        let high = low + width;
        let primes = primesift::find_primes_in_range(low, high).unwrap();
        let expected: Vec<u64> = (low..=high).filter(|&n| is_prime_trial(n)).collect();
        prop_assert_eq!(primes, expected, "low={} high={}", low, high);
    }

    /// Splitting a window in two and concatenating gives the same primes.
    #[test]
    fn prop_range_splits_concatenate(low in 0u64..10_000, a in 0u64..3_000, b in 1u64..3_000) {
        let mid = low + a;
        let high = mid + b;
        let mut joined = primesift::find_primes_in_range(low, mid).unwrap();
        joined.extend(primesift::find_primes_in_range(mid + 1, high).unwrap());
        prop_assert_eq!(joined, primesift::find_primes_in_range(low, high).unwrap());
    }

    /// Inverted windows are rejected, never answered.
    #[test]
    fn prop_range_rejects_inverted(high in 0u64..1_000_000, gap in 1u64..1_000) {
        let low = high + gap;
        prop_assert_eq!(
            primesift::find_primes_in_range(low, high),
            Err(primesift::SieveError::InvertedRange { low, high })
        );
    }

    /// `isqrt` is the exact floor square root over the whole u64 range.
    #[test]
    fn prop_isqrt_is_floor_root(n in any::<u64>()) {
        let r = primesift::isqrt(n);
        prop_assert!(r.checked_mul(r).is_some_and(|sq| sq <= n));
        prop_assert!((r + 1).checked_mul(r + 1).map_or(true, |sq| sq > n));
    }
}
