use std::num::NonZeroU64;

use crate::{utility, Error, FromRng, Result, Rng};

/// A deterministic pseudo-random number generator based on the [SplitMix64] algorithm.
///
/// The whole state of the generator is a single `u64`. Each draw adds a fixed odd increment
/// to it and scrambles the result, so the additive sequence has a full period of `2^64`.
///
/// Two generators created from the same seed and driven by the same sequence of calls produce
/// the same values, on every platform.
///
/// # Concurrency
///
/// Every draw takes `&mut self`. Workers that need their own stream should get their own
/// instance, for example through [`fork`](SplitMix64::fork).
///
/// # Security
///
/// This generator is **not** cryptographically secure. Its output is trivially predictable
/// from a single observed value.
///
/// [SplitMix64]: http://prng.di.unimi.it/splitmix64.c
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SplitMix64 {
    x: u64,
}

const TWO: NonZeroU64 = match NonZeroU64::new(2) {
    Some(n) => n,
    None => panic!(),
};

impl SplitMix64 {
    /// Creates a new generator whose state is `seed`.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { x: seed }
    }

    /// Creates a new generator seeded from the entropy of the operating system.
    ///
    /// The draws themselves remain deterministic: only the seed is random. If no entropy is
    /// available, a warning is logged and the generator starts from the zero seed.
    pub fn from_entropy() -> Self {
        match crate::system::entropy() {
            Some(seed) => {
                splitmix64_log::trace!("seeded a generator from entropy: {seed}");
                Self::new(seed)
            }
            None => {
                splitmix64_log::warning!("no entropy available, falling back to the zero seed");
                Self::default()
            }
        }
    }

    /// Overwrites the state of the generator, restarting the stream from `seed`.
    #[inline]
    pub fn reseed(&mut self, seed: u64) {
        splitmix64_log::trace!("reseeded a generator: {} -> {seed}", self.x);
        self.x = seed;
    }

    /// Returns the current state of the generator.
    ///
    /// Passing this value to [`new`](SplitMix64::new) or [`reseed`](SplitMix64::reseed)
    /// resumes the stream from the current position.
    #[inline]
    pub const fn state(&self) -> u64 {
        self.x
    }

    /// Advances the generator and returns the next raw 64-bit value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.x = self.x.wrapping_add(utility::GOLDEN_GAMMA);
        utility::mix64(self.x)
    }

    /// Returns a value in `[0.0, 1.0)` with 53 bits of precision.
    ///
    /// Consumes exactly one draw.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        utility::f64_from_u64_01(self.next_u64())
    }

    /// Reduces one draw into `[0, n)`.
    #[inline]
    pub(crate) fn bounded(&mut self, n: NonZeroU64) -> u64 {
        self.next_u64() % n
    }

    /// Returns a value in `[0, n)`.
    ///
    /// The draw is reduced with a plain remainder, so values are very slightly biased towards
    /// the low end when `n` is not a power of two. Consumes exactly one draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRange`] when `n` is zero. The generator is left untouched.
    pub fn random_range(&mut self, n: u64) -> Result<u64> {
        let n = NonZeroU64::new(n).ok_or(Error::EmptyRange)?;
        Ok(self.bounded(n))
    }

    /// Returns a value in `[low, high]`, both ends included.
    ///
    /// This computes `random_range(high - low + 1) + low` without overflowing, for every
    /// primitive integer type up to 64 bits. When the interval covers all `2^64` values of a
    /// 64-bit type, the raw draw is offset by `low` instead. Consumes exactly one draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] when `low > high`. The generator is left untouched.
    pub fn random_int<T: RangeInt>(&mut self, low: T, high: T) -> Result<T> {
        let low = low.to_i128();
        let high = high.to_i128();

        if low > high {
            return Err(Error::InvalidInterval { low, high });
        }

        // At most 2^64, which only happens for the full range of a 64-bit type.
        let span = (high - low + 1) as u128;
        let offset = match u64::try_from(span).ok().and_then(NonZeroU64::new) {
            Some(n) => self.bounded(n),
            None => self.next_u64(),
        };

        Ok(T::from_i128(low + offset as i128))
    }

    /// Returns either `0` or `1`.
    ///
    /// Consumes exactly one draw.
    #[inline]
    pub fn toss(&mut self) -> u8 {
        self.bounded(TWO) as u8
    }

    /// Creates a new generator seeded with the next draw of this one.
    ///
    /// The parent advances by exactly one draw. This is a convenient way to hand a separate
    /// generator to each worker while keeping the whole program reproducible from one seed.
    #[inline]
    pub fn fork(&mut self) -> Self {
        Self::new(self.next_u64())
    }
}

impl Rng for SplitMix64 {
    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self::new(seed)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        SplitMix64::next_u64(self)
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        SplitMix64::next_f64(self)
    }
}

impl FromRng for SplitMix64 {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        Self::new(rng.next_u64())
    }
}

impl From<u64> for SplitMix64 {
    #[inline]
    fn from(seed: u64) -> Self {
        Self::new(seed)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that [`SplitMix64::random_int`] can produce.
///
/// This trait is sealed: it is implemented for every primitive integer type of at most 64
/// bits and cannot be implemented outside of this crate.
pub trait RangeInt: Copy + sealed::Sealed {
    /// Widens the value without loss.
    fn to_i128(self) -> i128;

    /// Narrows a value that is known to be in range for `Self`.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_range_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RangeInt for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_range_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
