/// `2^-53`, the spacing of `f64` values in `[0.5, 1.0)`.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// `2^-24`, the spacing of `f32` values in `[0.5, 1.0)`.
const F32_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Converts a `u64` value into a `f64` value in the range `[0.0, 1.0)`.
///
/// Only the 53 most significant bits of `x` are used. Every one of them fits in the mantissa,
/// so no rounding happens and the result can never reach `1.0`.
#[inline]
pub fn f64_from_u64_01(x: u64) -> f64 {
    (x >> 11) as f64 * F64_UNIT
}

/// Converts a `u32` value into a `f32` value in the range `[0.0, 1.0)`.
///
/// Only the 24 most significant bits of `x` are used.
#[inline]
pub fn f32_from_u32_01(x: u32) -> f32 {
    (x >> 8) as f32 * F32_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(f64_from_u64_01(0), 0.0);
        assert!(f64_from_u64_01(u64::MAX) < 1.0);
        assert_eq!(f64_from_u64_01(u64::MAX), 1.0 - F64_UNIT);

        assert_eq!(f32_from_u32_01(0), 0.0);
        assert!(f32_from_u32_01(u32::MAX) < 1.0);
    }

    #[test]
    fn low_bits_are_ignored() {
        assert_eq!(f64_from_u64_01(1 << 11), F64_UNIT);
        assert_eq!(f64_from_u64_01((1 << 11) - 1), 0.0);
    }
}
