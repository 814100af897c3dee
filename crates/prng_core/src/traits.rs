//! Generator traits shared by every bit generator.
//!
//! The contract is split in two so that sampling code which only draws words
//! can stay generic over [`BitGenerator`], while construction and reseeding
//! live in [`SeedableBitGenerator`].

use crate::word::Word;

/// Stateful source of fixed-width unsigned words.
///
/// # Declared Range
///
/// `MIN` and `MAX` describe the range of values the generator can emit.
/// Every generator in this crate declares `MIN == 0`; the sampling engine
/// rejects generators that do not. `MAX` may be smaller than the word's full
/// range, in which case consumers mask the output with it.
///
/// # Examples
///
/// ```
/// use prng_core::{BitGenerator, XorShift32};
///
/// fn sum_of<G: BitGenerator<Word = u32>>(generator: &mut G, n: usize) -> u64 {
///     (0..n).map(|_| u64::from(generator.next_word())).sum()
/// }
///
/// let mut generator = XorShift32::new(1);
/// assert!(sum_of(&mut generator, 4) > 0);
/// ```
pub trait BitGenerator {
    /// Output word type.
    type Word: Word;

    /// Smallest value the generator can emit.
    const MIN: Self::Word;

    /// Largest value the generator can emit.
    const MAX: Self::Word;

    /// Short human-readable name used in log and error messages.
    const NAME: &'static str;

    /// Advances the state and returns the next word.
    fn next_word(&mut self) -> Self::Word;

    /// Advances the state by `count` words, discarding them.
    ///
    /// There is no jump-ahead shortcut: this costs exactly `count` calls to
    /// [`next_word`](Self::next_word).
    fn discard(&mut self, count: u64) {
        for _ in 0..count {
            self.next_word();
        }
    }
}

/// Bit generator that can be constructed from, and reset by, a seed.
pub trait SeedableBitGenerator: BitGenerator + Sized {
    /// Creates a generator initialised with `seed`.
    fn from_seed(seed: Self::Word) -> Self;

    /// Resets the generator's primary state from `seed`.
    ///
    /// Implementations are free to reset only part of their state, so
    /// `reseed(s)` is not required to reproduce `from_seed(s)`.
    fn reseed(&mut self, seed: Self::Word);

    /// Creates a generator seeded with [`DEFAULT_SEED`](crate::DEFAULT_SEED).
    fn with_default_seed() -> Self {
        Self::from_seed(<Self::Word as Word>::DEFAULT_SEED)
    }
}
