//! 32-bit Mersenne twister (MT19937).
//!
//! The reference generator that samplers fall back on when xorshift quality
//! is not enough. Seeding follows the classic `init_genrand` recurrence, so
//! streams match every other MT19937 implementation seeded with the same
//! 32-bit value.

use crate::traits::{BitGenerator, SeedableBitGenerator};
use rand::RngCore;

const STATE_WORDS: usize = 624;
const SHIFT_SIZE: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// 32-bit Mersenne twister.
///
/// Unlike the xorshift generators, [`reseed`](SeedableBitGenerator::reseed)
/// re-initialises the whole state, so a reseeded generator replays the
/// stream of a fresh one.
///
/// # Examples
///
/// ```
/// use prng_core::{BitGenerator, Mt19937};
///
/// let mut generator = Mt19937::new(5489);
/// assert_eq!(generator.next_word(), 3_499_211_612);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: Box<[u32; STATE_WORDS]>,
    index: usize,
}

impl Mt19937 {
    /// Creates a generator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            state: Box::new([0u32; STATE_WORDS]),
            index: STATE_WORDS,
        };
        generator.reseed(seed);
        generator
    }

    fn twist(&mut self) {
        for k in 0..STATE_WORDS {
            let y = (self.state[k] & UPPER_MASK)
                | (self.state[(k + 1) % STATE_WORDS] & LOWER_MASK);
            let mut next = self.state[(k + SHIFT_SIZE) % STATE_WORDS] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[k] = next;
        }
        self.index = 0;
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl BitGenerator for Mt19937 {
    type Word = u32;
    const MIN: u32 = 0;
    const MAX: u32 = u32::MAX;
    const NAME: &'static str = "mt19937";

    #[inline]
    fn next_word(&mut self) -> u32 {
        if self.index >= STATE_WORDS {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }
}

impl SeedableBitGenerator for Mt19937 {
    #[inline]
    fn from_seed(seed: u32) -> Self {
        Self::new(seed)
    }

    fn reseed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..STATE_WORDS {
            let previous = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(previous ^ (previous >> 30))
                .wrapping_add(i as u32);
        }
        self.index = STATE_WORDS;
    }
}

impl RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
