//! Exponential deviates.

use super::uniform::float64;
use super::WordSource;

/// Returns an exponential deviate with rate 1 (mean 1).
///
/// Inverse-CDF transform `-ln(1 - u)` of one uniform draw; consumes exactly
/// one word. `1 - u` lies in `(0, 1]`, so the result is finite and
/// non-negative.
pub fn exp_float64<W: WordSource + ?Sized>(src: &mut W) -> f64 {
    -(1.0 - float64(src)).ln()
}
