#[allow(unused_imports)]
use num_traits::Float;

/// Number of decimal digits kept when rounding angle results.
pub const DEFAULT_PRECISION: u8 = 5;

/// Length used by the angle constructors when the caller has no preference.
pub const DEFAULT_LENGTH: f64 = 1.0;

pub(crate) const fn default_precision() -> u8 {
    DEFAULT_PRECISION
}

/// Rounds `num` to `precision` decimal digits, halfway cases away from zero.
///
/// The halfway test is made on the binary product `num * 10^precision`, not on
/// the exact decimal expansion of `num`, so a literal such as `0.999965` rounds
/// up even though the nearest double lies just below it. Values too large to be
/// scaled are returned as they are.
pub(crate) fn round(num: f64, precision: u8) -> f64 {
    let factor = 10.0f64.powi(i32::from(precision));
    let scaled = num * factor;
    if !scaled.is_finite() {
        return num;
    }
    scaled.round() / factor
}
