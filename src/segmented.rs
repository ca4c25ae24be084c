//! # Segmented — Block-Wise Sieve of `[0, n]`
//!
//! Sieves up to `n` while holding only `O(√n + S)` bits: the base primes
//! `≤ √n` and one block of `S` consecutive integers.
//!
//! ## Algorithm
//!
//! 1. Base primes `≤ ⌊√n⌋` from the odd-only sieve, computed once per call.
//! 2. Emit 2, then sweep `[3, n]` in blocks `[low, high]` with
//!    `high = min(low + S - 1, n)`. Every block starts on an odd value; the
//!    next block starts at the first odd value after `high`.
//! 3. For each odd base prime `p` with `p*p ≤ high`, the first multiple to
//!    strike is the smallest multiple of `p` that is `≥ max(p*p, low)`,
//!    bumped by `p` when even. From there every `2p`-th position is cleared,
//!    which visits exactly the odd multiples of `p` in the block.
//! 4. Odd values of the block (even offsets, since `low` is odd) that are
//!    still set are prime.
//!
//! The block bitmap covers every integer of the block, not only odd ones, so
//! offsets map to values as `low + offset`. One bitmap is allocated for the
//! whole sweep and reset per block.

use tracing::{debug, trace};

use crate::bitmap::{bit_len, span_len, Bitmap};
use crate::error::SieveError;
use crate::odd::{next_odd_at_least, sieve_by_odd};
use crate::sieve::{estimate_prime_count, isqrt};

/// Generate all primes `≤ n`, sieving `segment_size` integers at a time.
///
/// Output is identical to [`crate::sieve`] for every `n` and every
/// `segment_size ≥ 1`. Smaller segments use less memory and take more
/// iterations; nothing here picks a default.
///
/// # Errors
/// [`SieveError::ZeroSegmentSize`] if `segment_size == 0`.
pub fn segmented_sieve(n: u64, segment_size: u64) -> Result<Vec<u64>, SieveError> {
    if segment_size == 0 {
        return Err(SieveError::ZeroSegmentSize);
    }
    if n < 2 {
        return Ok(vec![]);
    }

    let base_primes = sieve_by_odd(isqrt(n));
    let mut primes = Vec::with_capacity(estimate_prime_count(n));
    primes.push(2);
    if n == 2 {
        return Ok(primes);
    }

    // [3, n] holds n - 2 integers; no block is wider than that.
    let mut block = Bitmap::new_all_set(bit_len(segment_size.min(n - 2)));
    let mut low = 3u64;
    let mut segments = 0u64;
    loop {
        let high = low.saturating_add(segment_size - 1).min(n);
        strike_block(&mut block, &base_primes, low, high);
        primes.extend(
            block
                .iter_set_bits()
                .filter(|offset| offset % 2 == 0)
                .map(|offset| low + offset as u64),
        );
        segments += 1;
        trace!(low, high, found = primes.len(), "segment sieved");

        if high == n {
            break;
        }
        low = next_odd_at_least(high + 1);
        if low > n {
            break;
        }
    }

    debug!(
        n,
        segment_size,
        base_primes = base_primes.len(),
        segments,
        found = primes.len(),
        "segmented sieve complete"
    );
    Ok(primes)
}

/// Reset `block` to span `[low, high]` and strike odd multiples of every
/// odd base prime whose square lies in range.
fn strike_block(block: &mut Bitmap, base_primes: &[u64], low: u64, high: u64) {
    debug_assert!(low % 2 == 1, "segment must start on an odd value, got {}", low);
    block.reset_all_set(span_len(low, high));

    for &p in base_primes.iter().skip_while(|&&p| p < 3) {
        if p > high / p {
            break;
        }
        let Some(first) = first_multiple_at_least(p, low) else {
            continue;
        };
        let mut start = first.max(p * p);
        if start % 2 == 0 {
            start = match start.checked_add(p) {
                Some(odd) => odd,
                None => continue,
            };
        }
        if start > high {
            continue;
        }
        let step = usize::try_from(2 * p).unwrap_or(usize::MAX);
        block.clear_every((start - low) as usize, step);
    }
}

/// Smallest multiple of `p` that is `≥ bound`, or `None` if it exceeds
/// `u64::MAX`.
pub(crate) fn first_multiple_at_least(p: u64, bound: u64) -> Option<u64> {
    bound.div_ceil(p).checked_mul(p)
}
