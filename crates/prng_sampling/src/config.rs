//! Sampling engine configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`SamplingEngine`](crate::SamplingEngine).
///
/// # Disk Rejection Cap
///
/// Unit-disk sampling accepts a candidate with probability π/4, so the loop
/// terminates almost surely. By default it is unbounded. Setting
/// `max_disk_attempts` caps the number of candidate points per sample; when
/// the cap is reached the sampler fails with
/// [`SamplingError::RejectionExhausted`](crate::SamplingError::RejectionExhausted)
/// instead of looping. A cap changes behaviour only for broken generators.
///
/// # Example
///
/// ```
/// use prng_sampling::SamplerConfig;
///
/// let config = SamplerConfig::default();
/// assert_eq!(config.max_disk_attempts, None);
///
/// let capped = SamplerConfig::capped(64);
/// assert_eq!(capped.max_disk_attempts, Some(64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Maximum candidate points per unit-disk sample; `None` loops until
    /// a point is accepted.
    pub max_disk_attempts: Option<usize>,
}

impl SamplerConfig {
    /// Create a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `max_disk_attempts == Some(0)`.
    ///
    /// # Example
    ///
    /// ```
    /// use prng_sampling::SamplerConfig;
    ///
    /// let config = SamplerConfig::new(Some(10));
    /// assert_eq!(config.max_disk_attempts, Some(10));
    /// ```
    pub fn new(max_disk_attempts: Option<usize>) -> Self {
        assert!(
            max_disk_attempts != Some(0),
            "max_disk_attempts must be > 0"
        );
        Self { max_disk_attempts }
    }

    /// Unbounded rejection loop (the default).
    pub fn unbounded() -> Self {
        Self {
            max_disk_attempts: None,
        }
    }

    /// Rejection loop capped at `attempts` candidates per sample.
    ///
    /// # Panics
    ///
    /// Panics if `attempts == 0`.
    pub fn capped(attempts: usize) -> Self {
        Self::new(Some(attempts))
    }
}
