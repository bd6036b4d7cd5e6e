//! Saving and restoring the position of a generator.

use std::fmt;
use std::str::FromStr;

use crate::{Error, SplitMix64};

/// A saved position in the stream of a [`SplitMix64`] generator.
///
/// A checkpoint is exactly the state of the generator. It formats as the decimal
/// representation of that state and can be parsed back from it, which makes it suitable for
/// storing in text formats that cannot represent every `u64` faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Checkpoint(pub u64);

impl fmt::Display for Checkpoint {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Checkpoint {
    type Err = Error;

    /// Parses a checkpoint from its decimal representation.
    ///
    /// Only ASCII digits are accepted: no sign, no whitespace, no prefix. The value must fit
    /// in a `u64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidCheckpoint);
        }

        s.parse().map(Self).map_err(|_| Error::InvalidCheckpoint)
    }
}

impl From<Checkpoint> for u64 {
    #[inline]
    fn from(checkpoint: Checkpoint) -> Self {
        checkpoint.0
    }
}

impl SplitMix64 {
    /// Saves the current position of the stream.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.state())
    }

    /// Moves the stream back (or forward) to a saved position.
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.reseed(checkpoint.0);
    }
}

impl From<Checkpoint> for SplitMix64 {
    #[inline]
    fn from(checkpoint: Checkpoint) -> Self {
        Self::new(checkpoint.0)
    }
}
