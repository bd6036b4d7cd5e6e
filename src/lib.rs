//! A deterministic, seed-reproducible pseudo-random number generator.
//!
//! [`SplitMix64`] carries a single 64-bit state and produces the same stream of values for
//! the same seed on every platform. It is meant for simulations, tests and procedural
//! generation, **not** for anything security-sensitive.
//!
//! ```
//! use splitmix64::SplitMix64;
//!
//! let mut rng = SplitMix64::new(0);
//! assert_eq!(rng.next_u64(), 16294208416658607535);
//!
//! let roll = rng.random_int(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//! ```

// Lets the derive macro refer to `::splitmix64` from inside this crate.
extern crate self as splitmix64;

pub mod utility;

mod error;
pub use error::*;

mod generator;
pub use generator::*;

mod checkpoint;
pub use checkpoint::*;

mod choice;

mod dice;
pub use dice::*;

mod system;

pub use splitmix64_derive::FromRng;

/// A seeded pseudo-random number generator.
pub trait Rng {
    /// Creates a new [`Rng`] instance from the provided seed.
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Generates a pseudo-random `u64` value.
    fn next_u64(&mut self) -> u64;

    /// Generates a random `u32` value from the upper half of a `u64` draw.
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generates a random `f64` value in the range `[0.0, 1.0)`.
    #[inline(always)]
    fn next_f64(&mut self) -> f64 {
        utility::f64_from_u64_01(self.next_u64())
    }

    /// Generates a random `f32` value in the range `[0.0, 1.0)`.
    #[inline(always)]
    fn next_f32(&mut self) -> f32 {
        utility::f32_from_u32_01(self.next_u32())
    }

    /// Generates a random `bool` from the lowest bit of a `u64` draw.
    #[inline(always)]
    fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 != 0
    }
}

/// A trait for types that can be generated from a random number generator.
pub trait FromRng {
    /// Generates a new instance of `Self` from the provided random number generator.
    fn from_rng(rng: &mut impl Rng) -> Self;
}

impl FromRng for u32 {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        rng.next_u32()
    }
}

impl FromRng for u64 {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        rng.next_u64()
    }
}

impl FromRng for f32 {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        rng.next_f32()
    }
}

impl FromRng for f64 {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        rng.next_f64()
    }
}

impl FromRng for bool {
    #[inline]
    fn from_rng(rng: &mut impl Rng) -> Self {
        rng.next_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, FromRng)]
    struct Spawn {
        position: u64,
        scale: f64,
        flipped: bool,
    }

    #[derive(Debug, PartialEq, FromRng)]
    struct Pair(u32, u64);

    #[derive(FromRng)]
    struct Marker;

    #[derive(Debug, PartialEq, FromRng)]
    struct Wrapped<T> {
        inner: T,
        extra: u64,
    }

    #[test]
    fn derived_fields_are_drawn_in_order() {
        let mut rng = SplitMix64::new(77);
        let spawn = Spawn::from_rng(&mut rng);

        let mut reference = SplitMix64::new(77);
        assert_eq!(spawn.position, reference.next_u64());
        assert_eq!(spawn.scale, reference.next_f64());
        assert_eq!(spawn.flipped, reference.next_u64() & 1 != 0);
        assert_eq!(rng, reference);
    }

    #[test]
    fn derived_tuple_struct() {
        let mut rng = SplitMix64::new(78);
        let pair = Pair::from_rng(&mut rng);

        let mut reference = SplitMix64::new(78);
        assert_eq!(pair, Pair((reference.next_u64() >> 32) as u32, reference.next_u64()));
    }

    #[test]
    fn derived_generic_struct() {
        let mut rng = SplitMix64::new(82);
        let wrapped = Wrapped::<f64>::from_rng(&mut rng);

        let mut reference = SplitMix64::new(82);
        assert_eq!(
            wrapped,
            Wrapped {
                inner: reference.next_f64(),
                extra: reference.next_u64(),
            }
        );
    }

    #[test]
    fn derived_unit_struct_draws_nothing() {
        let mut rng = SplitMix64::new(79);
        let Marker = Marker::from_rng(&mut rng);
        assert_eq!(rng.state(), 79);
    }

    #[test]
    fn next_bool_matches_toss() {
        let mut a = SplitMix64::new(80);
        let mut b = SplitMix64::new(80);
        for _ in 0..100 {
            assert_eq!(a.next_bool(), b.toss() == 1);
        }
    }

    #[test]
    fn forked_generators_from_rng() {
        let mut parent = SplitMix64::new(81);
        let child = SplitMix64::from_rng(&mut parent);
        assert_eq!(child, SplitMix64::new(81).fork());
    }
}
