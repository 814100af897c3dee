//! 64-bit xorshift generator with sixteen words of state.
//!
//! The `xorshift1024*` construction: a rotating index over a 1024-bit state,
//! three xor-shifts per draw, and a final odd multiplier that scrambles the
//! output and breaks the linear correlations of the raw xorshift state.

use crate::traits::{BitGenerator, SeedableBitGenerator};
use rand::RngCore;
use tracing::warn;

const STATE_WORDS: usize = 16;
const INDEX_MASK: usize = STATE_WORDS - 1;
const OUTPUT_MULTIPLIER: u64 = 1_181_783_497_276_652_981;

/// 64-bit xorshift generator.
///
/// # Seeding
///
/// Construction with seed `S` zeroes the state, stores `S` in word 0, starts
/// the index at `S & 15` and then discards `S & 255` outputs to move away from
/// the nearly all-zero initial state.
///
/// [`reseed`](SeedableBitGenerator::reseed) overwrites word 0 only. The
/// other fifteen words and the index keep their current values, so a
/// reseeded generator does not replay the stream of a fresh one.
///
/// A zero seed leaves the whole state at zero and the generator emits zeros
/// forever.
///
/// # Examples
///
/// ```
/// use prng_core::{BitGenerator, XorShift64};
///
/// let mut generator = XorShift64::new(42);
/// assert_eq!(generator.next_word(), 5_064_113_193_005_485_209);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    state: [u64; STATE_WORDS],
    index: usize,
}

impl XorShift64 {
    /// Creates a generator seeded with `seed`, including the warm-up discard.
    pub fn new(seed: u64) -> Self {
        if seed == 0 {
            warn!("xorshift64 seeded with 0: state is all-zero and output is constant");
        }

        let mut state = [0u64; STATE_WORDS];
        state[0] = seed;
        let mut generator = Self {
            state,
            index: (seed & INDEX_MASK as u64) as usize,
        };
        generator.discard(seed & 255);
        generator
    }

    /// Current position of the rotating index, in `0..16`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl BitGenerator for XorShift64 {
    type Word = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;
    const NAME: &'static str = "xorshift64";

    #[inline]
    fn next_word(&mut self) -> u64 {
        let mut s0 = self.state[self.index];
        self.index = (self.index + 1) & INDEX_MASK;
        let mut s1 = self.state[self.index];
        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        s0 ^= s0 >> 30;
        self.state[self.index] = s0 ^ s1;
        self.state[self.index].wrapping_mul(OUTPUT_MULTIPLIER)
    }
}

impl SeedableBitGenerator for XorShift64 {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.state[0] = seed;
    }
}

impl RngCore for XorShift64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // High half: the multiplier mixes the upper bits best.
        (self.next_word() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_vector_seed_42() {
        let mut generator = XorShift64::new(42);
        assert_eq!(generator.next_word(), 5_064_113_193_005_485_209);
        assert_eq!(generator.next_word(), 13_876_907_420_633_791_620);
        assert_eq!(generator.next_word(), 15_009_852_508_127_289_110);
    }

    #[test]
    fn test_default_seed_stream() {
        let mut generator = XorShift64::default();
        assert_eq!(generator.next_word(), 9_040_840_742_593_123_065);
        assert_eq!(generator.next_word(), 1_536_236_628_229_416_540);
    }

    #[test]
    fn test_warm_up_matches_manual_discard() {
        // Seed 16: index 0, and 16 warm-up draws.
        let mut manual = XorShift64 {
            state: {
                let mut state = [0u64; STATE_WORDS];
                state[0] = 16;
                state
            },
            index: 0,
        };
        manual.discard(16);
        assert_eq!(manual, XorShift64::new(16));
    }

    #[test]
    fn test_index_starts_from_seed_low_bits() {
        // 256 & 255 == 0, so no warm-up moves the index.
        let generator = XorShift64::new(256 + 5);
        assert_eq!(generator.index(), (5 + 5) & INDEX_MASK);
        let generator = XorShift64::new(256);
        assert_eq!(generator.index(), 0);
    }

    #[test]
    fn test_reseed_only_touches_word_zero() {
        let mut generator = XorShift64::new(1234);
        let before = generator.clone();
        generator.reseed(42);
        assert_eq!(generator.state[0], 42);
        assert_eq!(generator.state[1..], before.state[1..]);
        assert_eq!(generator.index, before.index);
    }

    #[test]
    fn test_reseed_diverges_from_fresh() {
        let mut reseeded = XorShift64::default();
        reseeded.reseed(42);
        let mut fresh = XorShift64::new(42);
        let a: Vec<u64> = (0..8).map(|_| reseeded.next_word()).collect();
        let b: Vec<u64> = (0..8).map(|_| fresh.next_word()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_seed_is_constant_zero() {
        let mut generator = XorShift64::new(0);
        assert!((0..64).all(|_| generator.next_word() == 0));
    }

    #[test]
    fn test_rng_core_next_u32_takes_high_half() {
        let mut reference = XorShift64::new(9);
        let expected = (reference.next_word() >> 32) as u32;
        let mut generator = XorShift64::new(9);
        assert_eq!(generator.next_u32(), expected);
    }
}
