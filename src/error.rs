/// Invalid arguments to the segmented and range sieves.
///
/// The flat sieves are total over `u64` and never return an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    /// `segmented_sieve` was given a segment width of zero.
    ZeroSegmentSize,
    /// `find_primes_in_range` was given `low > high`.
    InvertedRange { low: u64, high: u64 },
}

impl std::fmt::Display for SieveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveError::ZeroSegmentSize => write!(f, "segment size must be at least 1"),
            SieveError::InvertedRange { low, high } => {
                write!(f, "invalid range: low {} is greater than high {}", low, high)
            }
        }
    }
}

impl std::error::Error for SieveError {}
