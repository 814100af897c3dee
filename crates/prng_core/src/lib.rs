//! # prng_core: Bit Generators for the xorshf Sampling Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! prng_core is the bottom layer of the two-layer architecture, providing:
//! - The word abstraction over `u32`/`u64` outputs (`word`)
//! - The generator traits every bit generator implements (`traits`)
//! - A 32-bit xorshift generator with 4-word state (`xorshift32`)
//! - A 64-bit xorshift generator with 16-word state and output multiplier (`xorshift64`)
//! - The 32-bit Mersenne twister, MT19937 (`mt19937`)
//! - An adapter that turns any `rand` generator into a bit generator (`external`)
//! - Error types: `GeneratorError` (`error`)
//!
//! Layer 2 (`prng_sampling`) is generic over [`BitGenerator`] and never
//! names a concrete generator in its hot paths.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{BitGenerator, SeedableBitGenerator, XorShift32, XorShift64};
//!
//! let mut gen32 = XorShift32::new(42);
//! assert_eq!(gen32.next_word(), 88_621_792);
//!
//! // Same seed, same stream
//! let mut a = XorShift64::new(7);
//! let mut b = XorShift64::new(7);
//! assert_eq!(a.next_word(), b.next_word());
//!
//! // Default seed is 123456789
//! let default = XorShift32::with_default_seed();
//! assert_eq!(default, XorShift32::new(123_456_789));
//! ```
//!
//! ## Thread Safety
//!
//! Every generator is a plain value mutated through `&mut self`. Share one
//! across threads only behind a lock; the usual pattern is one generator per
//! thread or per reproducible sequence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod external;
pub mod mt19937;
pub mod traits;
pub mod word;
pub mod xorshift32;
pub mod xorshift64;

pub use error::GeneratorError;
pub use external::RandCoreGenerator;
pub use mt19937::Mt19937;
pub use traits::{BitGenerator, SeedableBitGenerator};
pub use word::Word;
pub use xorshift32::XorShift32;
pub use xorshift64::XorShift64;

/// Seed used when a caller does not supply one.
pub const DEFAULT_SEED: u32 = 123_456_789;
