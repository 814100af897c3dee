//! Error types for the sampling engine.

use thiserror::Error;

/// Categorised sampling errors.
///
/// # Variants
/// - `NonZeroMinimum`: the generator's declared minimum is not 0
/// - `EmptyRange`: the generator's declared maximum is 0
/// - `ZeroModulus`: bounded integer requested with modulus 0
/// - `DegenerateRadius`: a unit-disk sample landed exactly on the origin
/// - `InvalidRadius`: radius multiplier is not finite and positive
/// - `RejectionExhausted`: the configured disk-sampling cap was reached
///
/// # Examples
/// ```
/// use prng_sampling::SamplingError;
///
/// let err = SamplingError::RejectionExhausted { attempts: 8 };
/// assert_eq!(
///     format!("{}", err),
///     "Unit-disk rejection sampling exhausted after 8 attempts"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// Generator declares a minimum other than 0.
    #[error("Generator {generator} declares minimum {minimum}; sampling requires 0")]
    NonZeroMinimum {
        /// Generator name
        generator: &'static str,
        /// Declared minimum, formatted
        minimum: String,
    },

    /// Generator declares a maximum of 0.
    #[error("Generator {generator} declares an empty range (maximum 0)")]
    EmptyRange {
        /// Generator name
        generator: &'static str,
    },

    /// Bounded integer requested with a zero modulus.
    #[error("Modulus must be non-zero")]
    ZeroModulus,

    /// Squared radius of the disk sample is 0, so `ln(s) / s` is undefined.
    #[error("Unit-disk sample has zero squared radius; logarithm undefined")]
    DegenerateRadius,

    /// Radius multiplier is not a finite positive number.
    #[error("Radius multiplier must be finite and positive, got {0}")]
    InvalidRadius(f64),

    /// Disk rejection sampling hit its configured attempt cap.
    #[error("Unit-disk rejection sampling exhausted after {attempts} attempts")]
    RejectionExhausted {
        /// Number of candidate points drawn
        attempts: usize,
    },
}
