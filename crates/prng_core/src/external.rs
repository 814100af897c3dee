//! Adapter exposing any `rand` generator as a 32-bit bit generator.
//!
//! This is how an externally maintained generator (ChaCha, PCG, or any
//! other `rand` engine) is substituted for the built-in generators
//! without touching the sampling layer.

use crate::error::GeneratorError;
use crate::traits::{BitGenerator, SeedableBitGenerator};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

/// 32-bit bit generator backed by a [`rand::RngCore`] implementation.
///
/// Draws one `next_u32` per word and declares the full `u32` range.
///
/// # Seeding
///
/// Unlike the xorshift generators, [`reseed`](SeedableBitGenerator::reseed)
/// re-initialises the wrapped generator completely through
/// [`SeedableRng::seed_from_u64`], so reseeding with `s` replays the stream
/// of `from_seed(s)`.
///
/// # Examples
///
/// ```
/// use prng_core::{BitGenerator, RandCoreGenerator, SeedableBitGenerator};
///
/// let mut a: RandCoreGenerator = RandCoreGenerator::from_seed(5);
/// let mut b: RandCoreGenerator = RandCoreGenerator::from_seed(5);
/// assert_eq!(a.next_word(), b.next_word());
/// ```
#[derive(Debug, Clone)]
pub struct RandCoreGenerator<R = StdRng> {
    inner: R,
}

impl<R: RngCore> RandCoreGenerator<R> {
    /// Wraps an already initialised generator.
    pub fn wrap(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore + SeedableRng> RandCoreGenerator<R> {
    /// Seeds the wrapped generator from the thread-local entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ExternalSeed`] if the entropy source fails.
    pub fn from_entropy() -> Result<Self, GeneratorError> {
        let inner = R::from_rng(rand::thread_rng())?;
        debug!("external generator seeded from entropy");
        Ok(Self { inner })
    }
}

impl<R: RngCore> BitGenerator for RandCoreGenerator<R> {
    type Word = u32;
    const MIN: u32 = 0;
    const MAX: u32 = u32::MAX;
    const NAME: &'static str = "rand_core";

    #[inline]
    fn next_word(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

impl<R: RngCore + SeedableRng> SeedableBitGenerator for RandCoreGenerator<R> {
    fn from_seed(seed: u32) -> Self {
        Self {
            inner: R::seed_from_u64(u64::from(seed)),
        }
    }

    fn reseed(&mut self, seed: u32) {
        self.inner = R::seed_from_u64(u64::from(seed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::XorShift32;

    #[test]
    fn test_reseed_replays_fresh_stream() {
        let mut reseeded: RandCoreGenerator = RandCoreGenerator::from_seed(1);
        reseeded.discard(10);
        reseeded.reseed(77);
        let mut fresh: RandCoreGenerator = RandCoreGenerator::from_seed(77);
        for _ in 0..16 {
            assert_eq!(reseeded.next_word(), fresh.next_word());
        }
    }

    #[test]
    fn test_wrap_forwards_next_u32() {
        let mut reference = XorShift32::new(11);
        let mut wrapped = RandCoreGenerator::wrap(XorShift32::new(11));
        for _ in 0..8 {
            assert_eq!(wrapped.next_word(), reference.next_word());
        }
        assert_eq!(wrapped.into_inner(), reference);
    }

    #[test]
    fn test_from_entropy() {
        let generator = RandCoreGenerator::<StdRng>::from_entropy();
        assert!(generator.is_ok());
    }

    #[test]
    fn test_default_seed_is_deterministic() {
        let mut a: RandCoreGenerator = RandCoreGenerator::with_default_seed();
        let mut b: RandCoreGenerator = RandCoreGenerator::from_seed(123_456_789);
        assert_eq!(a.next_word(), b.next_word());
    }
}
