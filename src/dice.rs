//! Tabletop dice.

use std::num::NonZeroU64;

use crate::{Error, Result, SplitMix64};

/// A kind of die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Die {
    /// Four faces, `1..=4`.
    D4,
    /// Six faces, `1..=6`.
    D6,
    /// Eight faces, `1..=8`.
    D8,
    /// Ten faces, `0..=9`.
    D10,
    /// Twelve faces, `1..=12`.
    D12,
    /// Twenty faces, `1..=20`.
    D20,
    /// The percentile die: ten faces, `00, 10, ..., 90`.
    D100,
}

impl Die {
    /// Every kind of die, in increasing number of sides.
    pub const ALL: [Self; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    /// Returns the die with the provided number of sides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDie`] when no die has `sides` sides.
    pub fn from_sides(sides: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|die| die.sides() == sides)
            .ok_or(Error::UnknownDie(sides))
    }

    /// The nominal number of sides of the die.
    pub const fn sides(self) -> u64 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    /// The smallest value the die can show.
    pub const fn min(self) -> u64 {
        match self {
            Self::D10 | Self::D100 => 0,
            _ => 1,
        }
    }

    /// The largest value the die can show.
    pub const fn max(self) -> u64 {
        match self {
            Self::D10 => 9,
            Self::D100 => 90,
            other => other.sides(),
        }
    }

    /// The number of distinct faces.
    const fn faces(self) -> NonZeroU64 {
        let faces = match self {
            Self::D10 | Self::D100 => 10,
            other => other.sides(),
        };

        match NonZeroU64::new(faces) {
            Some(faces) => faces,
            None => panic!("a die has no faces"),
        }
    }

    /// Rolls the die once.
    fn roll(self, rng: &mut SplitMix64) -> u64 {
        let face = rng.bounded(self.faces());

        match self {
            Self::D10 => face,
            Self::D100 => face * 10,
            _ => face + 1,
        }
    }
}

/// The outcome of [`SplitMix64::roll_dice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    /// The value shown by each die, in the order they were rolled.
    pub rolls: Vec<u64>,
    /// The sum of all [`rolls`](DiceRoll::rolls).
    pub total: u64,
}

impl SplitMix64 {
    /// Rolls `count` dice of the same kind.
    ///
    /// Consumes exactly one draw per die.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDice`] when `count` is zero.
    pub fn roll_dice(&mut self, count: usize, die: Die) -> Result<DiceRoll> {
        if count == 0 {
            return Err(Error::NoDice);
        }

        let rolls: Vec<u64> = (0..count).map(|_| die.roll(self)).collect();
        let total = rolls.iter().sum();

        Ok(DiceRoll { rolls, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_on_the_faces() {
        let mut rng = SplitMix64::new(6);
        for die in Die::ALL {
            let roll = rng.roll_dice(1000, die).unwrap();
            assert_eq!(roll.rolls.len(), 1000);
            assert_eq!(roll.total, roll.rolls.iter().sum::<u64>());
            for &value in &roll.rolls {
                assert!(
                    (die.min()..=die.max()).contains(&value),
                    "{die:?} showed {value}"
                );
            }
            assert!(roll.rolls.contains(&die.min()));
            assert!(roll.rolls.contains(&die.max()));
        }
    }

    #[test]
    fn percentile_die_shows_tens() {
        let mut rng = SplitMix64::new(100);
        let roll = rng.roll_dice(100, Die::D100).unwrap();
        assert!(roll.rolls.iter().all(|v| v % 10 == 0));
    }

    #[test]
    fn one_draw_per_die() {
        let mut a = SplitMix64::new(13);
        let mut b = SplitMix64::new(13);
        let roll = a.roll_dice(5, Die::D6).unwrap();
        for value in roll.rolls {
            assert_eq!(value, b.random_range(6).unwrap() + 1);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn no_dice() {
        let mut rng = SplitMix64::new(2);
        assert_eq!(rng.roll_dice(0, Die::D20), Err(Error::NoDice));
        assert_eq!(rng.state(), 2);
    }

    #[test]
    fn from_sides() {
        for die in Die::ALL {
            assert_eq!(Die::from_sides(die.sides()), Ok(die));
        }
        assert_eq!(Die::from_sides(7), Err(Error::UnknownDie(7)));
        assert_eq!(Die::from_sides(0), Err(Error::UnknownDie(0)));
    }
}
