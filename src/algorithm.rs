//! # Algorithm — Named Dispatch Over the Sieve Operations
//!
//! Lets callers (the CLI, benches, cross-checks) pick a sieve by name and
//! carry its arguments around as a value. Each [`SieveRequest`] variant maps
//! one-to-one onto a free function of the crate.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SieveError;
use crate::{find_primes_in_range, segmented_sieve, sieve, sieve_by_odd, sieve_till_root};

/// The five sieve strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Flat sieve of `[0, n]`.
    #[serde(rename = "sieve")]
    Bounded,
    /// Flat sieve used as a base-prime source.
    Root,
    /// Odd-only sieve of `[0, n]`.
    Odd,
    /// Block-wise sieve of `[0, n]`.
    Segmented,
    /// Single-pass sieve of `[low, high]`.
    Range,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bounded,
        Algorithm::Root,
        Algorithm::Odd,
        Algorithm::Segmented,
        Algorithm::Range,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bounded => "sieve",
            Algorithm::Root => "root",
            Algorithm::Odd => "odd",
            Algorithm::Segmented => "segmented",
            Algorithm::Range => "range",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown algorithm: {}", s))
    }
}

/// One sieve call with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum SieveRequest {
    #[serde(rename = "sieve")]
    Bounded { limit: u64 },
    Root { limit: u64 },
    Odd { limit: u64 },
    Segmented { limit: u64, segment_size: u64 },
    Range { low: u64, high: u64 },
}

impl SieveRequest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            SieveRequest::Bounded { .. } => Algorithm::Bounded,
            SieveRequest::Root { .. } => Algorithm::Root,
            SieveRequest::Odd { .. } => Algorithm::Odd,
            SieveRequest::Segmented { .. } => Algorithm::Segmented,
            SieveRequest::Range { .. } => Algorithm::Range,
        }
    }

    /// Run the sieve this request names.
    pub fn run(&self) -> Result<Vec<u64>, SieveError> {
        match *self {
            SieveRequest::Bounded { limit } => Ok(sieve(limit)),
            SieveRequest::Root { limit } => Ok(sieve_till_root(limit)),
            SieveRequest::Odd { limit } => Ok(sieve_by_odd(limit)),
            SieveRequest::Segmented {
                limit,
                segment_size,
            } => segmented_sieve(limit, segment_size),
            SieveRequest::Range { low, high } => find_primes_in_range(low, high),
        }
    }
}

/// Outcome of running every algorithm over `[0, limit]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCheck {
    pub limit: u64,
    pub segment_size: u64,
    /// Number of primes `≤ limit` found by the bounded sieve.
    pub reference_count: usize,
    /// Algorithms whose output differed from the bounded sieve.
    pub mismatches: Vec<Algorithm>,
}

impl CrossCheck {
    pub fn agrees(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Run all five algorithms over `[0, limit]` and compare against `sieve(limit)`.
///
/// # Errors
/// [`SieveError::ZeroSegmentSize`] if `segment_size == 0`.
pub fn cross_check(limit: u64, segment_size: u64) -> Result<CrossCheck, SieveError> {
    let reference = sieve(limit);
    let requests = [
        SieveRequest::Root { limit },
        SieveRequest::Odd { limit },
        SieveRequest::Segmented {
            limit,
            segment_size,
        },
        SieveRequest::Range {
            low: 0,
            high: limit,
        },
    ];

    let mut mismatches = Vec::new();
    for request in &requests {
        let primes = request.run()?;
        if primes != reference {
            warn!(
                algorithm = %request.algorithm(),
                limit,
                expected = reference.len(),
                got = primes.len(),
                "algorithm disagrees with bounded sieve"
            );
            mismatches.push(request.algorithm());
        }
    }

    Ok(CrossCheck {
        limit,
        segment_size,
        reference_count: reference.len(),
        mismatches,
    })
}
