//! # primesift — Sieves of Eratosthenes over Bounded Ranges
//!
//! Five one-shot sieves with different time/space trade-offs. Each call
//! allocates its own bitmaps, returns an ascending, duplicate-free
//! `Vec<u64>`, and frees everything before returning, so calls may run
//! concurrently from any number of threads.
//!
//! | Function | Range | Memory |
//! |---|---|---|
//! | [`sieve`] | `[0, n]` | `n` bits |
//! | [`sieve_till_root`] | `[0, n]`, used for base primes | `n` bits |
//! | [`sieve_by_odd`] | `[0, n]` | `n/2` bits |
//! | [`segmented_sieve`] | `[0, n]` | `√n/2 + S` bits |
//! | [`find_primes_in_range`] | `[low, high]` | `√high + (high - low)` bits |
//!
//! ```
//! assert_eq!(primesift::sieve(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! assert_eq!(
//!     primesift::find_primes_in_range(10, 30).unwrap(),
//!     vec![11, 13, 17, 19, 23, 29]
//! );
//! ```

pub mod algorithm;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod odd;
pub mod range;
pub mod report;
pub mod segmented;
pub mod sieve;

pub use algorithm::{cross_check, Algorithm, CrossCheck, SieveRequest};
pub use error::SieveError;
pub use odd::sieve_by_odd;
pub use range::find_primes_in_range;
pub use segmented::segmented_sieve;
pub use sieve::{isqrt, sieve, sieve_till_root};
