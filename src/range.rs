//! # Range — Sieve of an Arbitrary Interval `[low, high]`
//!
//! Finds primes in a window that need not start at zero, e.g.
//! `[10^12, 10^12 + 10^6]`, without touching anything below `low` except the
//! base primes `≤ √high`.
//!
//! Base primes come from the flat bounded sieve over `[0, ⌊√high⌋]`; there is
//! no recursion into segmented logic. The window itself is sieved in a single
//! pass with one bit per integer. For each base prime `p`, striking starts at
//! the smallest multiple of `p` that is `≥ max(p*p, low)` and steps by `p`.
//!
//! 0 and 1 are cleared whenever they fall inside the window: neither is ever
//! struck as a multiple of a base prime.

use tracing::debug;

use crate::bitmap::{span_len, Bitmap};
use crate::error::SieveError;
use crate::segmented::first_multiple_at_least;
use crate::sieve::base_primes_for;

/// Generate all primes `p` with `low ≤ p ≤ high`, in ascending order.
///
/// Agrees with `sieve(high)` restricted to values `≥ low`.
///
/// # Errors
/// [`SieveError::InvertedRange`] if `low > high`.
///
/// # Panics
/// Panics if `high - low + 1` bits cannot be addressed on this platform.
pub fn find_primes_in_range(low: u64, high: u64) -> Result<Vec<u64>, SieveError> {
    if low > high {
        return Err(SieveError::InvertedRange { low, high });
    }

    let base_primes = base_primes_for(high);
    let mut window = Bitmap::new_all_set(span_len(low, high));

    for &p in &base_primes {
        let Some(first) = first_multiple_at_least(p, low) else {
            continue;
        };
        let start = first.max(p * p);
        if start > high {
            continue;
        }
        let step = usize::try_from(p).unwrap_or(usize::MAX);
        window.clear_every((start - low) as usize, step);
    }

    for value in low..=high.min(1) {
        window.clear((value - low) as usize);
    }

    let primes: Vec<u64> = window
        .iter_set_bits()
        .map(|offset| low + offset as u64)
        .collect();

    debug!(
        low,
        high,
        base_primes = base_primes.len(),
        found = primes.len(),
        "range sieve complete"
    );
    Ok(primes)
}
