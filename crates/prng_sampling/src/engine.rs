//! Sampling engine built on top of a bit generator.
//!
//! [`SamplingEngine`] owns one generator and derives everything else from
//! masked words and the generator's declared maximum:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`integer`](SamplingEngine::integer) | word in `[0, MAX]` |
//! | [`bounded`](SamplingEngine::bounded) | `word mod n` |
//! | [`real`](SamplingEngine::real) | `[0, 1)` |
//! | [`real_signed`](SamplingEngine::real_signed) | `(-1, 1)` |
//! | [`real2`](SamplingEngine::real2) / [`real2_signed`](SamplingEngine::real2_signed) | `[0, 2)` / `(-2, 2)` |
//! | [`disk`](SamplingEngine::disk) | uniform point in the unit disk |
//! | [`gaussian`](SamplingEngine::gaussian) | standard normal 2D point |
//! | [`exponential`](SamplingEngine::exponential) | origin-heavy 2D point |

use crate::config::SamplerConfig;
use crate::error::SamplingError;
use crate::precision::Precision;
use num_traits::Zero;
use prng_core::{BitGenerator, SeedableBitGenerator, Word};
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Uniform point in the unit disk together with its squared radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskSample<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
    /// Squared radius `x² + y²`, in `[0, 1]`.
    pub s: T,
}

/// Point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

/// Generic sampler over a bit generator `G` and float precision `T`.
///
/// # Type Parameters
///
/// * `G` - Bit generator, owned by value
/// * `T` - Floating-point output type (defaults to `f64`)
///
/// # Declared Range
///
/// Construction fails unless the generator declares `MIN == 0` and a
/// non-zero `MAX`. Every draw is masked with `MAX`.
///
/// # Thread Safety
///
/// Each draw mutates the generator. Use one engine per thread.
///
/// # Examples
///
/// ```
/// use prng_core::XorShift64;
/// use prng_sampling::SamplingEngine;
///
/// let mut engine: SamplingEngine<XorShift64> = SamplingEngine::new(42).unwrap();
///
/// let u = engine.real();
/// assert!((0.0..1.0).contains(&u));
///
/// let point = engine.gaussian().unwrap();
/// assert!(point.x.is_finite() && point.y.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct SamplingEngine<G, T = f64> {
    generator: G,
    config: SamplerConfig,
    precision: PhantomData<T>,
}

impl<G, T> SamplingEngine<G, T>
where
    G: SeedableBitGenerator,
    T: Precision<G::Word>,
{
    /// Creates an engine whose generator is seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NonZeroMinimum`] or
    /// [`SamplingError::EmptyRange`] if the generator's declared range is
    /// unusable.
    ///
    /// # Examples
    ///
    /// ```
    /// use prng_core::XorShift32;
    /// use prng_sampling::SamplingEngine;
    ///
    /// let mut a: SamplingEngine<XorShift32> = SamplingEngine::new(7).unwrap();
    /// let mut b: SamplingEngine<XorShift32> = SamplingEngine::new(7).unwrap();
    /// assert_eq!(a.real(), b.real());
    /// ```
    pub fn new(seed: G::Word) -> Result<Self, SamplingError> {
        Self::with_config(seed, SamplerConfig::default())
    }

    /// Creates an engine seeded with [`prng_core::DEFAULT_SEED`].
    pub fn with_default_seed() -> Result<Self, SamplingError> {
        Self::from_generator(G::with_default_seed(), SamplerConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(seed: G::Word, config: SamplerConfig) -> Result<Self, SamplingError> {
        let engine = Self::from_generator(G::from_seed(seed), config)?;
        debug!(generator = G::NAME, %seed, "sampling engine seeded");
        Ok(engine)
    }

    /// Reseeds the embedded generator.
    ///
    /// This forwards to [`SeedableBitGenerator::reseed`], which for the
    /// xorshift generators resets only the primary state word.
    pub fn seed(&mut self, seed: G::Word) {
        debug!(generator = G::NAME, %seed, "reseeding");
        self.generator.reseed(seed);
    }
}

impl<G, T> SamplingEngine<G, T>
where
    G: BitGenerator,
    T: Precision<G::Word>,
{
    /// Wraps an existing generator.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NonZeroMinimum`] if `G::MIN != 0`, and
    /// [`SamplingError::EmptyRange`] if `G::MAX == 0`.
    pub fn from_generator(generator: G, config: SamplerConfig) -> Result<Self, SamplingError> {
        if !G::MIN.is_zero() {
            return Err(SamplingError::NonZeroMinimum {
                generator: G::NAME,
                minimum: G::MIN.to_string(),
            });
        }
        if G::MAX.is_zero() {
            return Err(SamplingError::EmptyRange { generator: G::NAME });
        }

        Ok(Self {
            generator,
            config,
            precision: PhantomData,
        })
    }

    /// Declared maximum of the embedded generator.
    #[inline]
    pub fn max() -> G::Word {
        G::MAX
    }

    /// Borrow the embedded generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Consumes the engine and returns the embedded generator.
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// Advances the embedded generator by `count` words.
    pub fn discard(&mut self, count: u64) {
        self.generator.discard(count);
    }

    #[inline]
    fn draw(&mut self) -> G::Word {
        self.generator.next_word() & G::MAX
    }

    /// Masked word in `[0, MAX]`.
    #[inline]
    pub fn integer(&mut self) -> G::Word {
        self.draw()
    }

    /// Word reduced modulo `n`, in `[0, n)`.
    ///
    /// # Modulo Bias
    ///
    /// When `n` does not divide `MAX + 1`, small results are slightly more
    /// likely than large ones. For `n` much smaller than `MAX` the bias is
    /// negligible; callers needing exact uniformity must reject themselves.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::ZeroModulus`] if `n == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prng_core::XorShift32;
    /// use prng_sampling::SamplingEngine;
    ///
    /// let mut engine: SamplingEngine<XorShift32> = SamplingEngine::new(1).unwrap();
    /// let die = engine.bounded(6).unwrap();
    /// assert!(die < 6);
    /// ```
    #[inline]
    pub fn bounded(&mut self, n: G::Word) -> Result<G::Word, SamplingError> {
        if n.is_zero() {
            return Err(SamplingError::ZeroModulus);
        }
        Ok(self.draw() % n)
    }

    /// Word reduced modulo `MAX`, in `[0, MAX)`.
    ///
    /// `MAX` itself folds onto 0.
    #[inline]
    pub fn bounded_max(&mut self) -> G::Word {
        self.draw() % G::MAX
    }

    /// Uniform real in `[0, 1)`: `word / MAX`.
    ///
    /// Quotients that reach `1.0` are pulled back to the largest `T` below
    /// one. That covers the word `MAX` itself and, when `T` has fewer
    /// mantissa bits than the word, the largest words that round up.
    #[inline]
    pub fn real(&mut self) -> T {
        let value = T::from_word(self.draw()) / T::from_word(G::MAX);
        value.min(T::below_one())
    }

    /// Uniform real in `(-1, 1)`.
    ///
    /// The word is reinterpreted as a signed value of the same width,
    /// shifted left by one bit and divided by `MAX`. This is not the same as
    /// `2 * real() - 1`: word 0 maps to 0 rather than -1, and the endpoints
    /// sit at the sign bit. Quotients at or beyond ±1 (the sign-bit word, and
    /// words rounding outwards in a narrow `T`) are pulled back inside the
    /// open interval.
    #[inline]
    pub fn real_signed(&mut self) -> T {
        let limit = T::below_one();
        let value = T::from_wide(self.draw().shifted_signed()) / T::from_word(G::MAX);
        value.max(-limit).min(limit)
    }

    /// Uniform real in `[0, 2)`.
    #[inline]
    pub fn real2(&mut self) -> T {
        self.real() * T::two()
    }

    /// Uniform real in `(-2, 2)`.
    #[inline]
    pub fn real2_signed(&mut self) -> T {
        self.real_signed() * T::two()
    }

    /// Uniform point in the unit disk by rejection sampling.
    ///
    /// Draws `x` and `y` from [`real_signed`](Self::real_signed) until
    /// `x² + y² <= 1`. Each candidate is accepted with probability π/4.
    /// The squared radius may be 0 when both coordinates are exactly 0.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::RejectionExhausted`] only when
    /// [`SamplerConfig::max_disk_attempts`] is set and reached. With the
    /// default configuration the loop is unbounded.
    pub fn disk(&mut self) -> Result<DiskSample<T>, SamplingError> {
        let mut attempts = 0usize;
        loop {
            let x = self.real_signed();
            let y = self.real_signed();
            attempts += 1;

            let s = x * x + y * y;
            if s <= T::one() {
                return Ok(DiskSample { x, y, s });
            }

            if let Some(limit) = self.config.max_disk_attempts {
                if attempts >= limit {
                    warn!(generator = G::NAME, attempts, "unit-disk rejection sampling exhausted");
                    return Err(SamplingError::RejectionExhausted { attempts });
                }
            }
        }
    }

    /// Standard normal point (mean 0, variance 1 per coordinate).
    ///
    /// Marsaglia polar method: a disk sample `(x, y, s)` is scaled by
    /// `sqrt(-2 ln(s) / s)`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::DegenerateRadius`] if the disk sample is the
    /// origin, plus any error from [`disk`](Self::disk).
    pub fn gaussian(&mut self) -> Result<Point2<T>, SamplingError> {
        self.polar(|s| (-(T::two() * s.ln()) / s).sqrt())
    }

    /// Normal point with each coordinate additionally scaled by `radius`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidRadius`] unless `radius` is finite and
    /// positive, plus any error from [`gaussian`](Self::gaussian).
    pub fn gaussian_scaled(&mut self, radius: T) -> Result<Point2<T>, SamplingError> {
        check_radius(radius)?;
        self.polar(|s| (-(T::two() * s.ln()) / s).sqrt() * radius)
    }

    /// Point scaled by `-ln(s) / s`.
    ///
    /// Same disk sample as [`gaussian`](Self::gaussian) without the square
    /// root and the factor 2, giving a distribution much denser near the
    /// origin. It is not a textbook exponential distribution.
    ///
    /// # Errors
    ///
    /// Same as [`gaussian`](Self::gaussian).
    pub fn exponential(&mut self) -> Result<Point2<T>, SamplingError> {
        self.polar(|s| -s.ln() / s)
    }

    /// [`exponential`](Self::exponential) with an extra `radius` multiplier.
    ///
    /// # Errors
    ///
    /// Same as [`gaussian_scaled`](Self::gaussian_scaled).
    pub fn exponential_scaled(&mut self, radius: T) -> Result<Point2<T>, SamplingError> {
        check_radius(radius)?;
        self.polar(|s| -s.ln() / s * radius)
    }

    /// Fills `buffer` with reals in `[0, 1)`.
    pub fn fill_real(&mut self, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.real();
        }
    }

    /// Fills `buffer` with reals in `(-1, 1)`.
    pub fn fill_real_signed(&mut self, buffer: &mut [T]) {
        for value in buffer.iter_mut() {
            *value = self.real_signed();
        }
    }

    /// Fills `buffer` with standard normal variates, two per Gaussian point.
    ///
    /// For odd lengths the `y` coordinate of the last point is dropped.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error from [`gaussian`](Self::gaussian);
    /// values written before it are kept.
    pub fn fill_gaussian(&mut self, buffer: &mut [T]) -> Result<(), SamplingError> {
        for pair in buffer.chunks_mut(2) {
            let point = self.gaussian()?;
            pair[0] = point.x;
            if let Some(second) = pair.get_mut(1) {
                *second = point.y;
            }
        }
        Ok(())
    }

    fn polar<F>(&mut self, factor: F) -> Result<Point2<T>, SamplingError>
    where
        F: FnOnce(T) -> T,
    {
        let DiskSample { x, y, s } = self.disk()?;
        if s <= T::zero() {
            warn!(generator = G::NAME, "unit-disk sample at the origin");
            return Err(SamplingError::DegenerateRadius);
        }

        let f = factor(s);
        Ok(Point2 { x: x * f, y: y * f })
    }
}

fn check_radius<T: num_traits::Float>(radius: T) -> Result<(), SamplingError> {
    if radius.is_finite() && radius > T::zero() {
        Ok(())
    } else {
        Err(SamplingError::InvalidRadius(
            radius.to_f64().unwrap_or(f64::NAN),
        ))
    }
}
