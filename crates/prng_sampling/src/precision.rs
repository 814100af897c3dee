//! Floating-point precision bridge between generator words and reals.

use num_traits::{AsPrimitive, Float};
use prng_core::Word;

/// Float type the sampling engine can produce from words of type `W`.
///
/// Blanket-implemented for every `Float` that the word and its wide signed
/// type convert into with `as`, which in practice means `f32` and `f64` for
/// both `u32` and `u64` words. Conversions round to nearest.
pub trait Precision<W: Word>: Float + 'static {
    /// Converts an unsigned word.
    fn from_word(word: W) -> Self;

    /// Converts a shifted signed word (see [`Word::shifted_signed`]).
    fn from_wide(wide: W::Wide) -> Self;

    /// The constant 2.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Largest value of this type strictly below 1.
    #[inline]
    fn below_one() -> Self {
        Self::one() - Self::epsilon() / Self::two()
    }
}

impl<W, T> Precision<W> for T
where
    W: Word + AsPrimitive<T>,
    W::Wide: AsPrimitive<T>,
    T: Float + 'static,
{
    #[inline]
    fn from_word(word: W) -> T {
        word.as_()
    }

    #[inline]
    fn from_wide(wide: W::Wide) -> T {
        wide.as_()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_conversion() {
        assert_eq!(<f64 as Precision<u32>>::from_word(u32::MAX), 4_294_967_295.0);
        assert_eq!(<f32 as Precision<u32>>::from_word(1), 1.0);
        // u64::MAX rounds up to 2^64 in f64.
        assert_eq!(<f64 as Precision<u64>>::from_word(u64::MAX), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_wide_conversion() {
        assert_eq!(<f64 as Precision<u32>>::from_wide(-2), -2.0);
        assert_eq!(<f64 as Precision<u64>>::from_wide(-(1i128 << 64)), -18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_two() {
        assert_eq!(<f32 as Precision<u32>>::two(), 2.0);
        assert_eq!(<f64 as Precision<u64>>::two(), 2.0);
    }

    #[test]
    fn test_below_one_is_predecessor_of_one() {
        let single = <f32 as Precision<u32>>::below_one();
        assert!(single < 1.0);
        assert_eq!(single, f32::from_bits(1.0f32.to_bits() - 1));

        let double = <f64 as Precision<u64>>::below_one();
        assert!(double < 1.0);
        assert_eq!(double, f64::from_bits(1.0f64.to_bits() - 1));
    }
}
