//! # prng_sampling: Sampling Engine for the xorshf Library
//!
//! ## Layer 2 Role
//!
//! prng_sampling turns the raw words of a `prng_core` bit generator into
//! samples:
//! - Bounded integers (`word mod n`)
//! - Uniform reals in `[0, 1)`, `(-1, 1)`, `[0, 2)` and `(-2, 2)`
//! - Uniform points in the unit disk (rejection sampling)
//! - Gaussian 2D points (Marsaglia polar method)
//! - Origin-heavy "exponential" 2D points
//!
//! The engine is generic over the generator (`G: BitGenerator`) and the
//! float precision (`T`, `f32` or `f64`). Concrete combinations are exposed
//! as type aliases.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_sampling::{SamplerConfig, XorShift64Sampler, XorShiftSampler};
//!
//! let mut sampler = XorShift64Sampler::<f64>::new(42).unwrap();
//! let point = sampler.gaussian().unwrap();
//! let scaled = sampler.exponential_scaled(0.5).unwrap();
//! # assert!(point.x.is_finite() && scaled.y.is_finite());
//!
//! // Cap the disk rejection loop instead of looping until acceptance
//! let mut capped = XorShiftSampler::<f32>::with_config(7, SamplerConfig::capped(1_000)).unwrap();
//! let disk = capped.disk().unwrap();
//! assert!(disk.s <= 1.0);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`SamplingError`]. Nothing in this crate
//! panics on generator output; the `s == 0` singularity of the polar
//! transforms is reported as [`SamplingError::DegenerateRadius`].
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`SamplerConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod engine;
pub mod error;
pub mod precision;

pub use config::SamplerConfig;
pub use engine::{DiskSample, Point2, SamplingEngine};
pub use error::SamplingError;
pub use precision::Precision;

use prng_core::{Mt19937, XorShift32, XorShift64};

/// Sampler over the 32-bit Mersenne twister.
pub type Random<T = f64> = SamplingEngine<Mt19937, T>;

/// Sampler over the 32-bit xorshift generator.
pub type XorShiftSampler<T = f64> = SamplingEngine<XorShift32, T>;

/// Sampler over the 64-bit xorshift generator.
pub type XorShift64Sampler<T = f64> = SamplingEngine<XorShift64, T>;
