/// The golden-ratio increment added to the state on every draw.
///
/// This is `2^64 / φ` rounded to the nearest odd integer, which makes the additive sequence
/// visit every 64-bit value before repeating.
pub const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// The multiplier of the first mixing round.
pub const MIX_MUL_1: u64 = 0xbf58_476d_1ce4_e5b9;

/// The multiplier of the second mixing round.
pub const MIX_MUL_2: u64 = 0x94d0_49bb_1331_11eb;

/// The stateless form of the [SplitMix64] algorithm.
///
/// Returns the output a generator whose state is `st` would produce on its next draw. The
/// state of that generator after the draw is `st.wrapping_add(GOLDEN_GAMMA)`.
///
/// [SplitMix64]: http://prng.di.unimi.it/splitmix64.c
#[inline]
pub fn splitmix64(st: u64) -> u64 {
    mix64(st.wrapping_add(GOLDEN_GAMMA))
}

/// The output function of SplitMix64, a bijective finalizer over 64-bit integers.
///
/// All shifts are logical and all multiplications wrap modulo `2^64`.
#[inline]
pub fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}
