//! Utility functions to work with random numbers.

mod mix;
pub use mix::*;

mod convert;
pub use convert::*;
