//! Error types for bit generator construction.

use thiserror::Error;

/// Errors raised while constructing a bit generator.
///
/// The xorshift generators are infallible; only adapters around external
/// `rand` generators can fail, when drawing their seed from another source.
///
/// # Examples
/// ```
/// use prng_core::GeneratorError;
///
/// let err = GeneratorError::from(rand::Error::new("entropy source unavailable"));
/// assert!(format!("{}", err).starts_with("Failed to seed external generator"));
/// ```
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// An external generator could not be seeded from its entropy source.
    #[error("Failed to seed external generator: {0}")]
    ExternalSeed(#[from] rand::Error),
}
