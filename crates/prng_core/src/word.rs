//! Output word types produced by bit generators.

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned};
use std::fmt;

/// Unsigned integer word emitted by a [`BitGenerator`](crate::BitGenerator).
///
/// Implemented for `u32` and `u64`. Besides the usual integer operations the
/// sampling layer needs two things from a word: a default seed of the same
/// width, and the signed-reinterpret-then-shift used for reals in `(-1, 1)`.
pub trait Word:
    PrimInt + Unsigned + fmt::Debug + fmt::Display + AsPrimitive<f32> + AsPrimitive<f64> + 'static
{
    /// Signed integer wide enough to hold the word's signed value shifted
    /// left by one bit without overflow.
    type Wide: PrimInt + Signed + fmt::Debug + AsPrimitive<f32> + AsPrimitive<f64>;

    /// [`DEFAULT_SEED`](crate::DEFAULT_SEED) at this width.
    const DEFAULT_SEED: Self;

    /// Reinterprets the bits as a signed value of the same width, then shifts
    /// left by one bit in the wide type.
    ///
    /// For an `n`-bit word the result lies in `[-2^n, 2^n - 2]` and is always
    /// even.
    ///
    /// # Examples
    ///
    /// ```
    /// use prng_core::Word;
    ///
    /// assert_eq!(0x7FFF_FFFFu32.shifted_signed(), 0xFFFF_FFFEi64);
    /// assert_eq!(0xFFFF_FFFFu32.shifted_signed(), -2);
    /// assert_eq!(0x8000_0000u32.shifted_signed(), -(1i64 << 32));
    /// ```
    fn shifted_signed(self) -> Self::Wide;
}

impl Word for u32 {
    type Wide = i64;

    const DEFAULT_SEED: Self = crate::DEFAULT_SEED;

    #[inline]
    fn shifted_signed(self) -> i64 {
        i64::from(self as i32) << 1
    }
}

impl Word for u64 {
    type Wide = i128;

    const DEFAULT_SEED: Self = crate::DEFAULT_SEED as u64;

    #[inline]
    fn shifted_signed(self) -> i128 {
        i128::from(self as i64) << 1
    }
}
