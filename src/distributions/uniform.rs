//! Uniform integers and floats.

use super::WordSource;
use crate::error::Rule30Error;

/// Returns the next word unchanged.
pub fn uint64<W: WordSource + ?Sized>(src: &mut W) -> u64 {
    src.next_word()
}

/// Returns the high 32 bits of one word; the low half is discarded.
pub fn uint32<W: WordSource + ?Sized>(src: &mut W) -> u32 {
    (src.next_word() >> 32) as u32
}

/// Returns a uniform integer in `[0, bound)`.
///
/// Words at or above the largest multiple of `bound` that fits in 64 bits
/// are rejected and redrawn, so the result carries no modulo bias. When
/// `bound` is a power of two nothing is ever rejected.
///
/// # Errors
/// Returns [`Rule30Error::InvalidArgument`] if `bound <= 0`.
pub fn intn<W: WordSource + ?Sized>(src: &mut W, bound: i64) -> Result<i64, Rule30Error> {
    if bound <= 0 {
        return Err(Rule30Error::InvalidArgument(bound));
    }
    let n = bound as u64;
    // 2^64 mod n
    let excess = (u64::MAX % n).wrapping_add(1) % n;
    let limit = 0u64.wrapping_sub(excess);
    loop {
        let word = src.next_word();
        if excess == 0 || word < limit {
            return Ok((word % n) as i64);
        }
    }
}

/// Returns a uniform `f64` in `[0, 1)` built from the top 53 bits of one word.
pub fn float64<W: WordSource + ?Sized>(src: &mut W) -> f64 {
    (src.next_word() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Returns a uniform `f32` in `[0, 1)` built from the top 24 bits of one word.
pub fn float32<W: WordSource + ?Sized>(src: &mut W) -> f32 {
    (src.next_word() >> 40) as f32 * (1.0 / (1u32 << 24) as f32)
}
