//! 32-bit xorshift generator with four words of state.
//!
//! Marsaglia's `xor128`: three shifts and three xors per draw, no
//! multiplication. Fast, but statistically weaker than [`XorShift64`].
//!
//! [`XorShift64`]: crate::XorShift64

use crate::traits::{BitGenerator, SeedableBitGenerator};
use rand::RngCore;

const Y_INIT: u32 = 362_436_069;
const Z_INIT: u32 = 521_288_629;
const W_INIT: u32 = 88_675_123;

/// 32-bit xorshift generator.
///
/// # Seeding
///
/// Only `x` comes from the seed; `y`, `z` and `w` always start from the same
/// three constants. [`reseed`](SeedableBitGenerator::reseed) overwrites `x`
/// alone, so reseeding a generator that has already produced output does not
/// put it back into the state [`XorShift32::new`] would produce.
///
/// # Examples
///
/// ```
/// use prng_core::{BitGenerator, XorShift32};
///
/// let mut generator = XorShift32::new(42);
/// assert_eq!(generator.next_word(), 88_621_792);
/// assert_eq!(generator.next_word(), 3_266_972_369);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift32 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorShift32 {
    /// Creates a generator seeded with `seed`.
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self {
            x: seed,
            y: Y_INIT,
            z: Z_INIT,
            w: W_INIT,
        }
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::with_default_seed()
    }
}

impl BitGenerator for XorShift32 {
    type Word = u32;
    const MIN: u32 = 0;
    const MAX: u32 = 0xFFFF_FFFF;
    const NAME: &'static str = "xorshift32";

    #[inline]
    fn next_word(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        self.w
    }
}

impl SeedableBitGenerator for XorShift32 {
    #[inline]
    fn from_seed(seed: u32) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn reseed(&mut self, seed: u32) {
        self.x = seed;
    }
}

impl RngCore for XorShift32 {
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
