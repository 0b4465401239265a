//! Standard normal deviates.

use std::f64::consts::PI;

use super::uniform::float64;
use super::WordSource;

/// Returns a standard normal deviate (mean 0, variance 1).
///
/// Uses the cosine branch of the Box-Muller transform and consumes exactly
/// two words per call. The sine partner is discarded rather than cached, so
/// the number of words drawn never depends on earlier calls.
///
/// `u1` is taken as `1 - float64()`, which lies in `(0, 1]` and keeps the
/// logarithm finite.
pub fn norm_float64<W: WordSource + ?Sized>(src: &mut W) -> f64 {
    let u1 = 1.0 - float64(src);
    let u2 = float64(src);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
