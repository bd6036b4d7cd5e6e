//! Picking elements out of slices.

use std::num::NonZeroU64;

use crate::{Error, Result, SplitMix64};

impl SplitMix64 {
    /// Returns a reference to a uniformly chosen element of `items`.
    ///
    /// Consumes exactly one draw.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySlice`] when `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let len = NonZeroU64::new(items.len() as u64).ok_or(Error::EmptySlice)?;
        let index = self.bounded(len);
        Ok(&items[index as usize])
    }

    /// Returns a reference to an element of `items`, chosen with a probability proportional
    /// to its weight.
    ///
    /// Entries are considered in the order of the slice. An entry with a weight of zero is
    /// never chosen. Consumes exactly one draw.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySlice`] when `items` is empty.
    /// - [`Error::InvalidWeight`] when a weight is negative, infinite or NaN.
    /// - [`Error::ZeroWeights`] when every weight is zero.
    /// - [`Error::WeightOverflow`] when the weights add up to more than `f64::MAX`.
    pub fn choose_weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(Error::EmptySlice);
        }

        let mut sum = 0.0f64;
        let mut last_positive = None;
        for (index, &(_, weight)) in items.iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight { index });
            }
            if weight > 0.0 {
                last_positive = Some(index);
            }
            sum += weight;
        }

        let last_positive = last_positive.ok_or(Error::ZeroWeights)?;
        if !sum.is_finite() {
            return Err(Error::WeightOverflow);
        }

        let mut r = self.next_f64() * sum;
        for (item, weight) in items {
            if r < *weight {
                return Ok(item);
            }
            r -= weight;
        }

        // Rounding in the running subtraction can leave a remainder past the end.
        Ok(&items[last_positive].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_covers_every_element() {
        let mut rng = SplitMix64::new(10);
        let items = ['a', 'b', 'c', 'd'];
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let c = rng.choose(&items).unwrap();
            seen[(*c as u8 - b'a') as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn choose_uses_random_range() {
        let mut a = SplitMix64::new(12);
        let mut b = SplitMix64::new(12);
        let items = [10, 20, 30, 40, 50];
        for _ in 0..100 {
            let index = b.random_range(items.len() as u64).unwrap() as usize;
            assert_eq!(a.choose(&items).unwrap(), &items[index]);
        }
    }

    #[test]
    fn choose_from_empty() {
        let mut rng = SplitMix64::new(1);
        let items: [u32; 0] = [];
        assert_eq!(rng.choose(&items), Err(Error::EmptySlice));
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn weighted_skips_zero_weights() {
        let mut rng = SplitMix64::new(20);
        let items = [("never", 0.0), ("rare", 1.0), ("never again", 0.0), ("often", 9.0)];
        let mut rare = 0;
        for _ in 0..10_000 {
            match *rng.choose_weighted(&items).unwrap() {
                "rare" => rare += 1,
                "often" => (),
                other => panic!("picked a zero-weight entry: {other}"),
            }
        }
        assert!((500..1500).contains(&rare), "{rare} rare picks");
    }

    #[test]
    fn weighted_single_entry() {
        let mut rng = SplitMix64::new(21);
        for _ in 0..100 {
            assert_eq!(rng.choose_weighted(&[(7, 0.5)]), Ok(&7));
        }
    }

    #[test]
    fn weighted_errors_leave_state_untouched() {
        let mut rng = SplitMix64::new(22);
        let empty: [(u8, f64); 0] = [];
        assert_eq!(rng.choose_weighted(&empty), Err(Error::EmptySlice));
        assert_eq!(
            rng.choose_weighted(&[(1, 1.0), (2, -1.0)]),
            Err(Error::InvalidWeight { index: 1 })
        );
        assert_eq!(
            rng.choose_weighted(&[(1, f64::NAN)]),
            Err(Error::InvalidWeight { index: 0 })
        );
        assert_eq!(
            rng.choose_weighted(&[(1, f64::INFINITY)]),
            Err(Error::InvalidWeight { index: 0 })
        );
        assert_eq!(
            rng.choose_weighted(&[(1, 0.0), (2, 0.0)]),
            Err(Error::ZeroWeights)
        );
        assert_eq!(rng.state(), 22);
    }

    #[test]
    fn weighted_walk_follows_the_draw() {
        // Seed 0 draws 0.8833.. then 0.4315.., scaled by a total weight of 10.
        let mut rng = SplitMix64::new(0);
        let items = [('a', 5.0), ('b', 3.0), ('c', 1.0), ('d', 1.0)];
        assert_eq!(rng.choose_weighted(&items), Ok(&'c'));
        assert_eq!(rng.choose_weighted(&items), Ok(&'a'));
        assert_eq!(rng, {
            let mut reference = SplitMix64::new(0);
            reference.next_u64();
            reference.next_u64();
            reference
        });
    }

    #[test]
    fn weighted_remainder_never_lands_on_zero_weight() {
        // The first draw of this seed is `u64::MAX`, the largest possible `next_f64`.
        let mut rng = SplitMix64::new(3558559446808474027);
        let items = [
            ("a", 0.1),
            ("b", 5.0),
            ("c", 0.01),
            ("d", 1.0),
            ("e", 1e16),
            ("zero", 0.0),
        ];
        assert_eq!(rng.choose_weighted(&items), Ok(&"e"));
    }

    #[test]
    fn weighted_sum_overflow() {
        let mut rng = SplitMix64::new(1);
        let items = [("a", f64::MAX), ("b", f64::MAX)];
        assert_eq!(rng.choose_weighted(&items), Err(Error::WeightOverflow));
        assert_eq!(rng.state(), 1);
    }
}
