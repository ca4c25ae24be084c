//! # Bitmap — Packed Primality Candidacy
//!
//! Dense bit array backing every sieve in this crate. A set bit means the
//! position has not yet been proven composite; striking a multiple clears it.
//! Bits are packed 64 to a `u64` word, an 8x reduction over `Vec<bool>`.
//!
//! Positions are plain offsets. Each sieve decides what an offset means:
//! `value = offset` for the bounded sieve, `value = low + offset` for range
//! and segment sieves, and `value = 2 * offset + 3` for the odd-only sieve.
//!
//! Unused high bits of the last word are always clear, so `count_ones` and
//! `iter_set_bits` never report positions past `len`.

/// Packed bit array where a set bit marks a surviving prime candidate.
#[derive(Debug, Clone)]
pub struct Bitmap {
    words: Vec<u64>,
    len: usize,
}

impl Bitmap {
    /// Create a bitmap of `len` bits, all set (every position is a candidate).
    pub fn new_all_set(len: usize) -> Self {
        let mut bitmap = Bitmap {
            words: Vec::new(),
            len: 0,
        };
        bitmap.reset_all_set(len);
        bitmap
    }

    /// Resize to `len` bits and set every bit, keeping the word allocation.
    ///
    /// Segment sieves call this once per block so one buffer serves the
    /// whole sweep.
    pub fn reset_all_set(&mut self, len: usize) {
        let num_words = len.div_ceil(64);
        self.words.clear();
        self.words.resize(num_words, u64::MAX);
        let extra = num_words * 64 - len;
        if extra > 0 {
            self.words[num_words - 1] >>= extra;
        }
        self.len = len;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if position `index` is still a candidate.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "Bitmap index out of bounds: {} >= {}",
            index,
            self.len
        );
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Mark position `index` as composite.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Clear `start`, `start + step`, `start + 2*step`, ... up to `len`.
    ///
    /// `step` must be non-zero.
    #[inline]
    pub fn clear_every(&mut self, start: usize, step: usize) {
        debug_assert!(step > 0);
        let mut index = start;
        while index < self.len {
            self.words[index / 64] &= !(1u64 << (index % 64));
            index = match index.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
    }

    /// Number of surviving candidates.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Positions of all set bits in ascending order.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| SetBits {
            word,
            base: wi * 64,
        })
    }
}

/// Set-bit positions within one word.
struct SetBits {
    word: u64,
    base: usize,
}

impl Iterator for SetBits {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1;
        Some(self.base + tz)
    }
}

/// Convert a bit count to `usize`, panicking if it cannot be addressed.
///
/// A bitmap that does not fit the address space could never be allocated,
/// so this is the same fatal condition as an allocation failure.
///
/// # Panics
/// Panics if `bits` exceeds `usize::MAX`.
pub(crate) fn bit_len(bits: u64) -> usize {
    usize::try_from(bits)
        .unwrap_or_else(|_| panic!("bitmap of {} bits exceeds the address space", bits))
}

/// Bits needed to cover the inclusive span `[low, high]`.
///
/// # Panics
/// Panics if the span has more than `usize::MAX` positions.
pub(crate) fn span_len(low: u64, high: u64) -> usize {
    debug_assert!(low <= high);
    let span = bit_len(high - low);
    span.checked_add(1)
        .unwrap_or_else(|| panic!("bitmap for [{}, {}] exceeds the address space", low, high))
}
