use std::fmt;

/// An error returned when an operation is given arguments it cannot draw from.
///
/// Errors are always detected before the generator is advanced, meaning that a failed call
/// leaves the stream exactly where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A range of zero values was requested.
    EmptyRange,
    /// An inclusive interval whose lower bound is greater than its upper bound was requested.
    InvalidInterval {
        /// The requested lower bound.
        low: i128,
        /// The requested upper bound.
        high: i128,
    },
    /// An element was requested from an empty slice.
    EmptySlice,
    /// A weight is negative, infinite or NaN.
    InvalidWeight {
        /// The position of the offending entry.
        index: usize,
    },
    /// Every weight is zero, so no entry can be picked.
    ZeroWeights,
    /// The weights are finite, but their sum is not.
    WeightOverflow,
    /// Zero dice were requested.
    NoDice,
    /// No die has the requested number of sides.
    UnknownDie(u64),
    /// A checkpoint string is not the decimal representation of a 64-bit unsigned integer.
    InvalidCheckpoint,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EmptyRange => write!(f, "the range is empty"),
            Self::InvalidInterval { low, high } => {
                write!(f, "the interval [{low}, {high}] is empty")
            }
            Self::EmptySlice => write!(f, "cannot choose from an empty slice"),
            Self::InvalidWeight { index } => {
                write!(f, "the weight at index {index} is negative or not finite")
            }
            Self::ZeroWeights => write!(f, "all weights are zero"),
            Self::WeightOverflow => write!(f, "the sum of the weights overflows"),
            Self::NoDice => write!(f, "at least one die must be rolled"),
            Self::UnknownDie(sides) => write!(
                f,
                "no die has {sides} sides (use 4, 6, 8, 10, 12, 20 or 100)"
            ),
            Self::InvalidCheckpoint => {
                write!(f, "invalid checkpoint: expected a decimal 64-bit number")
            }
        }
    }
}

impl std::error::Error for Error {}

/// The result type of the fallible operations of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
